mod users;

pub use users::{
    EguiPointerCapture, is_pointer_captured, search_bar, user_details, users_page, users_table,
};
