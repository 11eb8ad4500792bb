/// Key holding `{"userId": ...}` for the signed-in user.
pub const SESSION_KEY: &str = "session";
/// Key set to `"true"` once onboarding has been completed.
pub const ONBOARDING_KEY: &str = "onboarding_complete";
/// Value stored under [`ONBOARDING_KEY`].
pub const ONBOARDING_DONE: &str = "true";

/// Namespaces storage keys for shared backends such as Redis.
#[derive(Debug, Clone)]
pub struct KeyContext<'a> {
    pub prefix: &'a str,
    pub service: &'a str,
}

impl<'a> KeyContext<'a> {
    pub fn new(prefix: &'a str, service: &'a str) -> Self {
        Self { prefix, service }
    }

    pub fn item(&self, key: &str) -> String {
        format!("{}:{}:{}", self.prefix, self.service, key)
    }

    /// Pattern matching every item under this context.
    pub fn pattern(&self) -> String {
        format!("{}:{}:*", self.prefix, self.service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_item_keys() {
        let ctx = KeyContext::new("waymeet", "device");
        assert_eq!(ctx.item(SESSION_KEY), "waymeet:device:session");
        assert_eq!(ctx.pattern(), "waymeet:device:*");
    }
}
