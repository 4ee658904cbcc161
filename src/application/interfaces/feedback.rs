use mockall::automock;

/// User-visible feedback sink, the alert analogue of the original browser
/// client. One call per notice; implementations decide how to present it.
#[automock]
pub trait UserNotifier: Send + Sync {
    fn notify(&self, message: &str);
}
