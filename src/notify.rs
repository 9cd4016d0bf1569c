// notify.rs
//
// One-shot toast notifications. A handler that redirects stores the toast in
// a `flash` cookie; the next rendered page shows it and clears the cookie.

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn tag(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    /// `Set-Cookie` value carrying this toast across a redirect.
    pub fn to_cookie(&self) -> String {
        let value: String =
            url::form_urlencoded::byte_serialize(format!("{}:{}", self.kind.tag(), self.message).as_bytes())
                .collect();
        format!("{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
    }

    /// Inverse of [`Toast::to_cookie`] applied to the raw cookie value.
    pub fn from_cookie_value(raw: &str) -> Option<Self> {
        let decoded: String = url::form_urlencoded::parse(format!("v={raw}").as_bytes())
            .next()
            .map(|(_, v)| v.into_owned())?;
        let (tag, message) = decoded.split_once(':')?;

        let kind = match tag {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => return None,
        };
        Some(Self {
            kind,
            message: message.to_string(),
        })
    }
}

/// `Set-Cookie` value that removes a shown flash.
pub fn clear_flash_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}
