use crate::domain::User;
use crate::errors::ServerError;
use crate::notify::{clear_flash_cookie, Toast, FLASH_COOKIE};
use crate::request::cookie;
use crate::responses::{html_response_with, redirect_with, ResultResp};
use crate::state::AppState;
use crate::templates::Chrome;
use astra::Request;
use maud::Markup;

pub mod account;
pub mod admin;
pub mod browse;
pub mod item;
pub mod submit;

pub const SESSION_COOKIE: &str = "session";

/// What every handler needs to know about the caller.
pub struct Ctx {
    /// Raw session token, only set when it maps to a live session.
    pub session: Option<String>,
    pub user: Option<User>,
    /// Toast carried over from the previous redirect.
    pub flash: Option<Toast>,
    pub path: String,
}

impl Ctx {
    pub fn load(req: &Request, state: &AppState) -> Result<Self, ServerError> {
        let mut session = None;
        let mut user = None;

        if let Some(token) = cookie(req, SESSION_COOKIE).filter(|t| !t.is_empty()) {
            if let Some(found) = state.sessions.get(token)? {
                session = Some(token.to_string());
                user = Some(found);
            }
        }

        Ok(Self {
            session,
            user,
            flash: cookie(req, FLASH_COOKIE).and_then(Toast::from_cookie_value),
            path: req.uri().path().to_string(),
        })
    }

    /// Session token and user, when signed in.
    pub fn signed_in(&self) -> Option<(&str, &User)> {
        Some((self.session.as_deref()?, self.user.as_ref()?))
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn chrome(&self) -> Chrome<'_> {
        Chrome {
            user: self.user.as_ref(),
            toast: self.flash.as_ref(),
            path: &self.path,
        }
    }

    /// Chrome showing `toast` instead of any carried-over flash.
    pub fn chrome_with<'a>(&'a self, toast: &'a Toast) -> Chrome<'a> {
        Chrome {
            toast: Some(toast),
            ..self.chrome()
        }
    }

    /// Full page response. Clears the flash cookie once it has been shown.
    pub fn page(&self, markup: Markup) -> ResultResp {
        self.page_with_status(200, markup)
    }

    pub fn page_with_status(&self, status: u16, markup: Markup) -> ResultResp {
        let cookies = match self.flash {
            Some(_) => vec![clear_flash_cookie()],
            None => vec![],
        };
        html_response_with(status, &cookies, markup)
    }
}

/// Redirect and show `toast` on the next page.
pub fn redirect_with_toast(location: &str, toast: Toast) -> ResultResp {
    redirect_with(location, &[toast.to_cookie()])
}

/// Numeric path segment; anything else is a page that does not exist.
pub fn parse_id(raw: &str) -> Result<u32, ServerError> {
    raw.parse().map_err(|_| ServerError::NotFound)
}

pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
