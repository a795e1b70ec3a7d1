pub mod panel;
pub mod widget;

pub use panel::CapturePanel;
pub use widget::MapView;
