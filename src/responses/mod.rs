pub mod errors;
pub mod html;
pub mod json;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

pub use html::{html_response, html_response_with};
pub use json::json_response;
pub use redirect::{redirect, redirect_with};
