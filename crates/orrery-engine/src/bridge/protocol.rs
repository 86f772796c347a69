/// Frame data layout for hosts that copy every section into one contiguous
/// buffer. Each section also has its own pointer accessor on the runner.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Camera: 20 floats]
/// [Instances: max_instances × 12 floats]
/// [Events: max_events × 4 floats]
/// ```

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderInstance;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    pub camera_data_floats: usize,
    pub instance_data_floats: usize,
    pub event_data_floats: usize,

    pub camera_data_offset: usize,
    pub instance_data_offset: usize,
    pub event_data_offset: usize,

    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let camera_data_floats = CameraUniform::FLOATS;
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let event_data_floats = max_events * GameEvent::FLOATS;

        let camera_data_offset = 0;
        let instance_data_offset = camera_data_offset + camera_data_floats;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_events,
            camera_data_floats,
            instance_data_floats,
            event_data_floats,
            camera_data_offset,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }
}
