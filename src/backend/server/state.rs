/**
 * Application State Management
 *
 * `AppState` is the central state container of the router. It holds the
 * two persistence services, which share one injected store, and the relay
 * hub. The `FromRef` implementations let handlers extract only the part
 * they need, e.g. `State<NoteService>` or `State<RelayHub>`.
 *
 * # Thread Safety
 *
 * Every field is cheap to clone and safe to share: the services hold an
 * `Arc<dyn BoardStore>` and the hub holds `broadcast::Sender`s.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::comments::CommentService;
use crate::backend::notes::NoteService;
use crate::backend::realtime::RelayHub;
use crate::backend::store::{BoardStore, SharedStore};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Note CRUD
    pub notes: NoteService,

    /// Comment create/list
    pub comments: CommentService,

    /// Real-time relay; independent of the store
    pub relay: RelayHub,
}

impl AppState {
    /// Build the state around a store and a relay buffer size
    pub fn new(store: SharedStore, relay_capacity: usize) -> Self {
        Self {
            notes: NoteService::new(store.clone()),
            comments: CommentService::new(store),
            relay: RelayHub::new(relay_capacity),
        }
    }

    /// Build the state from a concrete store
    pub fn with_store<S>(store: S, relay_capacity: usize) -> Self
    where
        S: BoardStore + 'static,
    {
        Self::new(Arc::new(store), relay_capacity)
    }
}

impl FromRef<AppState> for NoteService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.notes.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.comments.clone()
    }
}

impl FromRef<AppState> for RelayHub {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}
