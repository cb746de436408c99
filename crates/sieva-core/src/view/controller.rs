use crate::{
    record::Record,
    schema::ListingSchema,
    store::StateStore,
    view::{self, Direction, SortSpec, ViewError, ViewState},
};

///
/// ListingController
///
/// Owns one listing's schema, current view state, and the storage port.
/// Every mutator validates against the schema first (a contract
/// violation fails fast with prior state untouched), then re-persists
/// the whole state. Persistence is fire-and-forget: a failed write is
/// not surfaced.
///
/// The controller holds no records; the collection is passed to
/// [`ListingController::derive`] by the rendering context that fetched
/// it.
///

pub struct ListingController {
    schema: ListingSchema,
    state: ViewState,
    store: Box<dyn StateStore>,
}

impl ListingController {
    /// Construct from persisted state where present, the schema default
    /// otherwise. A payload that fails to parse falls back to the
    /// default silently; stale state must never block a listing. A
    /// persisted payload whose field references no longer exist in the
    /// schema is discarded the same way.
    #[must_use]
    pub fn load(schema: ListingSchema, store: Box<dyn StateStore>) -> Self {
        let state = store
            .get(schema.state_key())
            .and_then(|payload| serde_json::from_str::<ViewState>(&payload).ok())
            .filter(|state| view::derive(&schema, &[], state).is_ok())
            .unwrap_or_else(|| ViewState::default_for(&schema));

        Self {
            schema,
            state,
            store,
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &ListingSchema {
        &self.schema
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Set the free-text search term. No constraints on input; the
    /// empty string means no constraint.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.persist();
    }

    /// Select a value for a categorical filter field; an empty value
    /// clears that filter.
    pub fn set_filter(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ViewError> {
        let field = field.into();

        let model = self
            .schema
            .field(&field)
            .ok_or_else(|| ViewError::unknown_field(self.schema.listing(), &field))?;

        if !model.kind.is_filterable() {
            return Err(ViewError::not_filterable(
                self.schema.listing(),
                field,
                model.kind,
            ));
        }

        let value = value.into();
        if value.is_empty() {
            self.state.filters.remove(&field);
        } else {
            self.state.filters.insert(field, value);
        }
        self.persist();

        Ok(())
    }

    /// Set the sort key and direction.
    pub fn set_sort(
        &mut self,
        field: impl Into<String>,
        direction: Direction,
    ) -> Result<(), ViewError> {
        let field = field.into();

        let model = self
            .schema
            .field(&field)
            .ok_or_else(|| ViewError::unknown_field(self.schema.listing(), &field))?;

        if !model.kind.is_sortable() {
            return Err(ViewError::not_sortable(
                self.schema.listing(),
                field,
                model.kind,
            ));
        }

        self.state.sort = SortSpec::new(field, direction);
        self.persist();

        Ok(())
    }

    /// Reset search, filters, and sort to the listing's defaults.
    pub fn clear_all(&mut self) {
        self.state = ViewState::default_for(&self.schema);
        self.persist();
    }

    /// Compute the ordered subset of `records` for the current state.
    pub fn derive<'a>(&self, records: &'a [Record]) -> Result<Vec<&'a Record>, ViewError> {
        view::derive(&self.schema, records, &self.state)
    }

    /// Selectable options for a categorical filter field, always from
    /// the full unfiltered collection.
    pub fn filter_options(
        &self,
        records: &[Record],
        field: &str,
    ) -> Result<Vec<String>, ViewError> {
        view::filter_options(&self.schema, records, field)
    }

    // Best-effort write of the whole state; serialization of ViewState
    // cannot fail and store errors are swallowed by contract.
    fn persist(&self) {
        if let Ok(payload) = serde_json::to_string(&self.state) {
            let _ = self.store.set(self.schema.state_key(), &payload);
        }
    }
}
