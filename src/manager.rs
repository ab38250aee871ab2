use crate::eventos::api::EventosAPI;
use crate::eventos::model::{Category, Event, Status};
use crate::feedback::UserFeedback;
use crate::filter::{visible_events, FilterState, SortDirection};
use tracing::{info, warn};

const CONFIRM_TITLE: &str = "¿Estás seguro?";
const CONFIRM_BODY: &str = "Esta acción desactivará el evento.";
const DEACTIVATED_NOTICE: &str = "El evento ha sido desactivado.";
const DEACTIVATE_FAILED_NOTICE: &str = "No se pudo desactivar el evento.";
const LOAD_FAILED_NOTICE: &str = "No se pudo cargar los eventos.";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Deactivation {
    Applied,
    Cancelled,
    Failed,
}

/**
Owns the loaded event collection and the active filter state, and drives
the soft-delete workflow. The collection is fetched once and patched in
place afterwards, never re-fetched.
*/
pub struct EventManager<F: UserFeedback> {
    api: EventosAPI,
    feedback: F,
    events: Vec<Event>,
    filter: FilterState,
}

impl<F: UserFeedback> EventManager<F> {
    pub fn new(api: EventosAPI, feedback: F) -> Self {
        Self {
            api,
            feedback,
            events: Vec::new(),
            filter: FilterState::default(),
        }
    }

    /**
    Replaces the collection with whatever the backend returns. On failure
    the user is notified once and the collection stays empty.
    */
    pub async fn load_events(&mut self) {
        match self.api.get_events().await {
            Ok(events) => {
                info!("Loaded {} events", events.len());
                self.events = events;
            }
            Err(_) => {
                self.events = Vec::new();
                self.feedback.notify_error(LOAD_FAILED_NOTICE);
            }
        }
    }

    pub fn visible_events(&self) -> Vec<Event> {
        visible_events(&self.events, &self.filter)
    }

    pub fn set_category_filter(&mut self, category: Option<Category>) {
        self.filter.category_filter = category;
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filter.name_query = query.into();
    }

    pub fn toggle_sort_direction(&mut self) -> SortDirection {
        self.filter.sort_direction = self.filter.sort_direction.flipped();
        self.filter.sort_direction
    }

    /**
    Soft delete: asks for confirmation, patches the backend, and flips the
    local record's status so it drops out of the visible list. The record is
    never removed from the collection and there is no reactivation.
    */
    pub async fn deactivate_event(&mut self, id: &str) -> Deactivation {
        if !self.feedback.confirm(CONFIRM_TITLE, CONFIRM_BODY) {
            info!("Deactivation of event {} cancelled", id);
            return Deactivation::Cancelled;
        }

        match self.api.deactivate_event(id).await {
            Ok(()) => {
                match self.events.iter_mut().find(|event| event.id == id) {
                    Some(event) => event.status = Status::Inactivo,
                    None => warn!("Deactivated event {} is not in the loaded collection", id),
                }

                self.feedback.notify_success(DEACTIVATED_NOTICE);
                Deactivation::Applied
            }
            Err(_) => {
                self.feedback.notify_error(DEACTIVATE_FAILED_NOTICE);
                Deactivation::Failed
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
