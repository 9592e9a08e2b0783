pub mod avatar;
pub mod form_field;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod table;
pub mod thumbnail_input;

pub use avatar::Avatar;
pub use form_field::TextField;
pub use header::Header;
pub use layout::Layout;
pub use modal::Modal;
pub use page::Page;
pub use pagination::Pagination;
pub use table::{SkeletonRows, SortableHeader};
pub use thumbnail_input::ThumbnailInput;
