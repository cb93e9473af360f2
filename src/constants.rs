// DOM wiring constants for the web frontend

// Canvas the demo page mounts controls on
pub const DEFAULT_CANVAS_ID: &str = "app-canvas";

// Listener sets registered by `activate`
pub const MOUSE_EVENTS: [&str; 4] = ["mousedown", "mousemove", "mouseup", "mouseleave"];
pub const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

// CSS `cursor` values mirrored from the interactor's affordance
pub const CURSOR_AUTO: &str = "auto";
pub const CURSOR_POINTER: &str = "pointer";
pub const CURSOR_MOVE: &str = "move";

// Camera field of view accepted from JS, in degrees
pub const MIN_FOVY_DEG: f32 = 1.0;
pub const MAX_FOVY_DEG: f32 = 179.0;
