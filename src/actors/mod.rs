pub mod widget;

pub use widget::{WidgetActor, WidgetArgs, WidgetMessage, WidgetState};
