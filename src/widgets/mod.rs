//! Built-in leaf widgets: Text, Image, Button, Divider, Spacer, Container.

pub mod button;
pub mod container;
pub mod divider;
pub mod image;
pub mod spacer;
pub mod text;

pub use button::Button;
pub use container::Container;
pub use divider::Divider;
pub use image::Image;
pub use spacer::Spacer;
pub use text::Text;
