use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub const ADMIN_COOKIE: &str = "adminToken";

/// Attributes of the admin session cookie.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookiePolicy {
    pub secure: bool,
}

impl SessionCookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub fn session(&self, token: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(ADMIN_COOKIE, token)
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .max_age(Duration::seconds(max_age_secs))
            .finish()
    }

    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(ADMIN_COOKIE, "")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .finish();
        cookie.make_removal();
        cookie
    }
}
