use crate::types::ExploreTab;

/// Transient view state shared between screens. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiStore {
    pub is_filters_modal_visible: bool,
    pub is_create_event_modal_visible: bool,
    pub active_explore_tab: ExploreTab,
    pub is_loading: bool,
    pub search_query: String,
}

impl UiStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filters_modal_visible(&mut self, visible: bool) {
        self.is_filters_modal_visible = visible;
    }

    pub fn set_create_event_modal_visible(&mut self, visible: bool) {
        self.is_create_event_modal_visible = visible;
    }

    pub fn set_active_explore_tab(&mut self, tab: ExploreTab) {
        self.active_explore_tab = tab;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}
