#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity: String,
    pub email: String,
}
