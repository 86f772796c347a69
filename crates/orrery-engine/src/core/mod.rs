pub mod ray;
pub mod scene;
pub mod time;
