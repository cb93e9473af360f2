// Native window and demo scene tuning

pub const WINDOW_TITLE: &str = "drag-controls (native)";
pub const WINDOW_SIZE: [u32; 2] = [960, 640];

// Demo objects laid out on the z = 0 plane, in front of the default camera
pub const DEMO_POSITIONS: [[f32; 3]; 3] = [[-2.5, 0.0, 0.0], [0.0, 1.0, 0.0], [2.5, -0.5, 0.0]];
pub const DEMO_RADIUS: f32 = 0.8;
