use crate::shell::state::AppState;
use crate::tests::fixtures::activities::make_registry;
use std::path::PathBuf;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(make_registry()))
}

pub fn make_offline_state() -> AppState {
    let mut registry = make_registry();
    registry.toggle_offline();
    AppState::new(Arc::new(registry))
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
