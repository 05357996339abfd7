//! Контроллер фильтров списка: дебаунс поиска, фасеты, загрузка.
//!
//! Сам контроллер не делает I/O. Каждое действие пользователя превращается в
//! [`Command`], который исполняет обвязка ([`super::handle`]): ставит таймер,
//! грузит справочник или запрашивает список. Ответы возвращаются обратно через
//! `*_resolved` / `timer_elapsed`.
//!
//! Гарантии:
//! - поиск и текстовые фасеты фиксируются только после паузы, значением на
//!   момент срабатывания таймера, без пробелов по краям у фасетов;
//! - выбор в списочных фасетах фиксируется сразу;
//! - каждый запрос списка получает `RequestId`, применяется только ответ на последний.

use super::schema::{FilterSchema, SEARCH_DEBOUNCE_MS};
use contracts::shared::catalog::{catalog_to_options, CatalogItem, FilterFacetOption};
use contracts::shared::filters::{FacetInput, FilterState, FilterValue};
use std::collections::BTreeMap;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

/// Поле со свободным вводом; у каждого свой таймер дебаунса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    Search,
    Facet(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    PendingDebounce,
    Fetching,
    Settled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Request the task list for this snapshot.
    Fetch { request: RequestId, filter: FilterState },
    /// Load the option catalog of one facet.
    LoadCatalog {
        facet: &'static str,
        endpoint: &'static str,
    },
    /// Arm the debounce timer of `field`; its previous timer is obsolete.
    ScheduleCommit {
        field: TextField,
        ticket: DebounceTicket,
        delay_ms: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FilterController<T> {
    schema: FilterSchema,
    filter: FilterState,
    pending_search: String,
    pending_inputs: BTreeMap<&'static str, String>,
    options: BTreeMap<&'static str, Vec<FilterFacetOption>>,
    rows: Vec<T>,
    error: Option<String>,
    next_ticket: u64,
    armed: BTreeMap<TextField, DebounceTicket>,
    next_request: u64,
    in_flight: Option<RequestId>,
    settled_once: bool,
}

impl<T> FilterController<T> {
    pub fn new(schema: FilterSchema) -> Self {
        let options = schema
            .facets
            .iter()
            .map(|f| (f.key, f.static_options()))
            .collect();
        Self {
            schema,
            filter: FilterState::empty(schema.keys()),
            pending_search: String::new(),
            pending_inputs: BTreeMap::new(),
            options,
            rows: Vec::new(),
            error: None,
            next_ticket: 0,
            armed: BTreeMap::new(),
            next_request: 0,
            in_flight: None,
            settled_once: false,
        }
    }

    /// Initial list fetch with the empty filter plus one catalog load per
    /// catalog-backed facet. The list fetch does not wait for catalogs.
    pub fn mount(&mut self) -> Vec<Command> {
        let mut commands = vec![self.begin_fetch()];
        commands.extend(self.schema.facets.iter().filter_map(|f| {
            f.catalog_endpoint().map(|endpoint| Command::LoadCatalog {
                facet: f.key,
                endpoint,
            })
        }));
        commands
    }

    /// Raw keystroke in the search box. Restarts the debounce window.
    pub fn input_search(&mut self, text: impl Into<String>) -> Command {
        self.pending_search = text.into();
        self.arm(TextField::Search)
    }

    /// Raw keystroke in a free-text facet (task number). The text is kept
    /// as typed and trimmed only when committed.
    pub fn input_facet(&mut self, key: &'static str, text: impl Into<String>) -> Command {
        self.pending_inputs.insert(key, text.into());
        self.arm(TextField::Facet(key))
    }

    fn arm(&mut self, field: TextField) -> Command {
        self.next_ticket += 1;
        let ticket = DebounceTicket(self.next_ticket);
        self.armed.insert(field, ticket);
        Command::ScheduleCommit {
            field,
            ticket,
            delay_ms: SEARCH_DEBOUNCE_MS,
        }
    }

    /// Debounce timer of `field` fired. Commits the pending text if `ticket`
    /// is the latest one for that field and the filter actually changes.
    pub fn timer_elapsed(&mut self, field: TextField, ticket: DebounceTicket) -> Option<Command> {
        if self.armed.get(&field) != Some(&ticket) {
            return None;
        }
        self.armed.remove(&field);
        let next = match field {
            TextField::Search => self.filter.with_search(self.pending_search.clone()),
            TextField::Facet(key) => {
                let text = self.pending_inputs.get(key).map_or("", |t| t.trim());
                self.filter.with_facet(key, text)
            }
        };
        if next == self.filter {
            return None;
        }
        self.filter = next;
        Some(self.begin_fetch())
    }

    /// Facet change, committed without debounce.
    pub fn change_facet(&mut self, key: &str, input: impl Into<FacetInput>) -> Command {
        self.filter = self.filter.with_facet(key, input);
        self.begin_fetch()
    }

    /// Removes one facet constraint, including text still being typed into it.
    pub fn clear_facet(&mut self, key: &str) -> Command {
        self.pending_inputs.remove(key);
        self.armed
            .retain(|field, _| !matches!(field, TextField::Facet(k) if *k == key));
        self.change_facet(key, FacetInput::Null)
    }

    /// Resets every facet and the search box; drops pending commits.
    pub fn clear_all(&mut self) -> Command {
        self.filter = self.filter.cleared();
        self.pending_search.clear();
        self.pending_inputs.clear();
        self.armed.clear();
        self.begin_fetch()
    }

    /// Re-fetches the current committed filter.
    pub fn refresh(&mut self) -> Command {
        self.begin_fetch()
    }

    pub fn fetch_resolved<E: Display>(
        &mut self,
        request: RequestId,
        result: Result<Vec<T>, E>,
    ) -> FetchOutcome {
        if self.in_flight != Some(request) {
            return FetchOutcome::Stale;
        }
        self.in_flight = None;
        self.settled_once = true;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                self.rows.clear();
                self.error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Stores a loaded catalog. On failure the facet keeps an empty option
    /// list and the error text is handed back for logging.
    pub fn catalog_resolved<E: Display>(
        &mut self,
        facet: &'static str,
        result: Result<Vec<CatalogItem>, E>,
    ) -> Option<String> {
        match result {
            Ok(items) => {
                self.options.insert(facet, catalog_to_options(items));
                None
            }
            Err(e) => {
                self.options.insert(facet, Vec::new());
                Some(e.to_string())
            }
        }
    }

    fn begin_fetch(&mut self) -> Command {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.in_flight = Some(request);
        Command::Fetch {
            request,
            filter: self.filter.clone(),
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.armed.is_empty() {
            Phase::PendingDebounce
        } else if self.in_flight.is_some() {
            Phase::Fetching
        } else if self.settled_once {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn schema(&self) -> FilterSchema {
        self.schema
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pending_search(&self) -> &str {
        &self.pending_search
    }

    /// Text shown in a free-text facet: as typed, or the committed value.
    pub fn pending_input(&self, facet: &str) -> String {
        match self.pending_inputs.get(facet) {
            Some(text) => text.clone(),
            None => self
                .selected(facet)
                .first()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn options(&self, facet: &str) -> &[FilterFacetOption] {
        self.options.get(facet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self, facet: &str) -> &[FilterValue] {
        self.filter.facet(facet).map(|s| s.values()).unwrap_or(&[])
    }

    pub fn active_filter_count(&self) -> usize {
        self.filter.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::multi_select::{rendered_summary, toggle_option, PanelState};
    use crate::shared::filters::schema::*;

    const FACETS: &[FacetSpec] = &[
        FACET_STATUS,
        FACET_COMPANY,
        FACET_ASSIGNEE,
        FACET_WORK_TYPE,
        FACET_EQUIPMENT,
    ];
    const SCHEMA: FilterSchema = FilterSchema { facets: FACETS };

    fn fetch_parts(cmd: Command) -> (RequestId, FilterState) {
        match cmd {
            Command::Fetch { request, filter } => (request, filter),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    /// Drives the controller on a virtual clock the way the browser glue does.
    struct Timeline {
        ctl: FilterController<&'static str>,
        now: u64,
        timers: Vec<(u64, TextField, DebounceTicket)>,
        fetches: Vec<(u64, RequestId, FilterState)>,
    }

    impl Timeline {
        fn mounted() -> Self {
            Self::mounted_with(SCHEMA)
        }

        fn mounted_with(schema: FilterSchema) -> Self {
            let mut ctl = FilterController::new(schema);
            let mut commands = ctl.mount().into_iter();
            let (request, _) = fetch_parts(commands.next().unwrap());
            ctl.fetch_resolved(request, Ok::<_, String>(vec!["initial"]));
            Self {
                ctl,
                now: 0,
                timers: Vec::new(),
                fetches: Vec::new(),
            }
        }

        fn advance_to(&mut self, t: u64) {
            self.timers.sort_by_key(|(at, _, _)| *at);
            while let Some(&(at, field, ticket)) = self.timers.first() {
                if at > t {
                    break;
                }
                self.timers.remove(0);
                self.now = at;
                if let Some(cmd) = self.ctl.timer_elapsed(field, ticket) {
                    let (request, filter) = fetch_parts(cmd);
                    self.fetches.push((at, request, filter));
                }
            }
            self.now = t;
        }

        fn type_at(&mut self, t: u64, text: &str) {
            self.advance_to(t);
            let cmd = self.ctl.input_search(text);
            self.schedule(t, cmd);
        }

        fn type_facet_at(&mut self, t: u64, key: &'static str, text: &str) {
            self.advance_to(t);
            let cmd = self.ctl.input_facet(key, text);
            self.schedule(t, cmd);
        }

        fn schedule(&mut self, t: u64, cmd: Command) {
            match cmd {
                Command::ScheduleCommit {
                    field,
                    ticket,
                    delay_ms,
                } => self.timers.push((t + u64::from(delay_ms), field, ticket)),
                other => panic!("expected timer, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_mount_fetches_list_and_all_catalogs() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        assert_eq!(ctl.phase(), Phase::Idle);
        let commands = ctl.mount();

        let (_, filter) = fetch_parts(commands[0].clone());
        assert_eq!(filter, FilterState::empty(SCHEMA.keys()));

        let catalogs: Vec<_> = commands[1..]
            .iter()
            .map(|c| match c {
                Command::LoadCatalog { endpoint, .. } => *endpoint,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(
            catalogs,
            vec![
                CATALOG_COMPANIES,
                CATALOG_ASSIGNEES,
                CATALOG_WORK_TYPES,
                CATALOG_EQUIPMENT
            ]
        );
        assert_eq!(ctl.phase(), Phase::Fetching);
    }

    #[test]
    fn test_catalog_fills_company_options() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        ctl.mount();
        assert!(ctl.options("company_id").is_empty());
        assert_eq!(ctl.options("status").len(), 5);

        let items = vec![CatalogItem {
            id: FilterValue::Int(1),
            name: "Acme".to_string(),
        }];
        assert_eq!(ctl.catalog_resolved("company_id", Ok::<_, String>(items)), None);

        let company = SCHEMA.facet("company_id").unwrap();
        assert_eq!(company.label, "Компания");
        assert_eq!(
            ctl.options(company.key),
            &[FilterFacetOption::new(1, "Acme")]
        );
    }

    #[test]
    fn test_catalog_failure_leaves_facet_empty() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        ctl.mount();
        let err = ctl.catalog_resolved("equipment_id", Err("HTTP 500"));
        assert_eq!(err.as_deref(), Some("HTTP 500"));
        assert!(ctl.options("equipment_id").is_empty());
        // list loading is unaffected
        assert!(ctl.is_loading());
    }

    #[test]
    fn test_typing_burst_commits_once_after_quiet_period() {
        let mut tl = Timeline::mounted();
        tl.type_at(0, "i");
        tl.type_at(100, "iv");
        tl.type_at(200, "iva");
        tl.type_at(300, "ivan");
        assert_eq!(tl.ctl.phase(), Phase::PendingDebounce);
        assert_eq!(tl.ctl.filter().search, "");

        tl.advance_to(799);
        assert!(tl.fetches.is_empty());

        tl.advance_to(5_000);
        assert_eq!(tl.fetches.len(), 1);
        let (at, _, filter) = &tl.fetches[0];
        assert_eq!(*at, 800);
        assert_eq!(filter.search, "ivan");
        assert_eq!(tl.ctl.phase(), Phase::Fetching);
    }

    #[test]
    fn test_separate_bursts_commit_separately() {
        let mut tl = Timeline::mounted();
        tl.type_at(0, "iv");
        tl.type_at(1_000, "ivan");
        tl.advance_to(3_000);
        let searches: Vec<_> = tl.fetches.iter().map(|(_, _, f)| f.search.clone()).collect();
        assert_eq!(searches, vec!["iv".to_string(), "ivan".to_string()]);
    }

    #[test]
    fn test_unchanged_text_does_not_fetch() {
        let mut tl = Timeline::mounted();
        tl.type_at(0, "a");
        tl.type_at(100, "");
        tl.advance_to(2_000);
        assert!(tl.fetches.is_empty());
        assert_eq!(tl.ctl.phase(), Phase::Settled);
    }

    #[test]
    fn test_facet_change_fetches_immediately_with_full_snapshot() {
        let mut tl = Timeline::mounted();
        tl.type_at(0, "ivan");
        tl.advance_to(600);

        let (_, filter) = fetch_parts(
            tl.ctl
                .change_facet("company_id", vec![FilterValue::Int(1), FilterValue::Int(2)]),
        );
        assert_eq!(filter.search, "ivan");
        assert_eq!(filter.facet("company_id").unwrap().len(), 2);
        assert!(filter.facet("status").unwrap().is_empty());
    }

    #[test]
    fn test_clear_facet_removes_constraint_and_fetches() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        ctl.mount();
        ctl.change_facet("status", vec![FilterValue::from("new")]);
        ctl.change_facet("company_id", FilterValue::Int(3));

        let (_, filter) = fetch_parts(ctl.clear_facet("status"));
        assert!(filter.facet("status").unwrap().is_empty());
        assert_eq!(filter.facet("company_id").unwrap().values(), &[FilterValue::Int(3)]);
        assert!(ctl.selected("status").is_empty());
    }

    #[test]
    fn test_normalization_through_controller() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        ctl.change_facet("status", "");
        assert!(ctl.selected("status").is_empty());
        ctl.change_facet("status", FacetInput::Null);
        assert!(ctl.selected("status").is_empty());
        ctl.change_facet("status", "x");
        assert_eq!(ctl.selected("status"), &[FilterValue::from("x")]);
    }

    #[test]
    fn test_clear_all_drops_pending_search() {
        let mut tl = Timeline::mounted();
        tl.ctl.change_facet("status", "new");
        tl.type_at(0, "ivan");

        let (_, filter) = fetch_parts(tl.ctl.clear_all());
        assert_eq!(filter, FilterState::empty(SCHEMA.keys()));
        assert_eq!(tl.ctl.pending_search(), "");

        tl.advance_to(2_000);
        assert!(tl.fetches.is_empty());
    }

    #[test]
    fn test_two_statuses_summary_and_outside_click() {
        let mut ctl: FilterController<()> = FilterController::new(SCHEMA);
        ctl.mount();
        let mut panel = PanelState::default().toggle();

        let first = toggle_option(ctl.selected("status"), &FilterValue::from("new"));
        ctl.change_facet("status", first);
        let second = toggle_option(ctl.selected("status"), &FilterValue::from("completed"));
        ctl.change_facet("status", second);

        let summary = rendered_summary(
            ctl.options("status"),
            ctl.selected("status"),
            FACET_STATUS.placeholder,
        );
        assert_eq!(summary, "2 выбрано");

        panel = panel.pointer_down(false);
        assert!(!panel.open);
        assert_eq!(ctl.selected("status").len(), 2);
    }

    #[test]
    fn test_fetch_failure_clears_list_without_retry() {
        let mut ctl: FilterController<&str> = FilterController::new(SCHEMA);
        let (first, _) = fetch_parts(ctl.mount().remove(0));
        ctl.fetch_resolved(first, Ok::<_, String>(vec!["a", "b"]));
        assert_eq!(ctl.rows().len(), 2);

        let (request, _) = fetch_parts(ctl.change_facet("status", "new"));
        // rows stay visible while loading
        assert_eq!(ctl.rows().len(), 2);
        assert!(ctl.is_loading());

        let outcome = ctl.fetch_resolved(request, Err::<Vec<&str>, _>("Ошибка сети"));
        assert_eq!(outcome, FetchOutcome::Failed);
        assert!(ctl.rows().is_empty());
        assert_eq!(ctl.error(), Some("Ошибка сети"));
        assert_eq!(ctl.phase(), Phase::Settled);
        assert!(!ctl.is_loading());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut ctl: FilterController<&str> = FilterController::new(SCHEMA);
        let (first, _) = fetch_parts(ctl.mount().remove(0));
        ctl.fetch_resolved(first, Err::<Vec<&str>, _>("boom"));
        let (second, _) = fetch_parts(ctl.refresh());
        ctl.fetch_resolved(second, Ok::<_, String>(Vec::new()));
        assert_eq!(ctl.error(), None);
        assert!(ctl.rows().is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut ctl: FilterController<&str> = FilterController::new(SCHEMA);
        let (initial, _) = fetch_parts(ctl.mount().remove(0));
        let (slow, _) = fetch_parts(ctl.change_facet("status", "new"));
        let (fast, _) = fetch_parts(ctl.change_facet("status", "completed"));

        assert_eq!(
            ctl.fetch_resolved(fast, Ok::<_, String>(vec!["completed"])),
            FetchOutcome::Applied
        );
        assert_eq!(
            ctl.fetch_resolved(slow, Ok::<_, String>(vec!["new"])),
            FetchOutcome::Stale
        );
        assert_eq!(
            ctl.fetch_resolved(initial, Ok::<_, String>(vec!["all"])),
            FetchOutcome::Stale
        );
        assert_eq!(ctl.rows(), &["completed"]);
    }

    #[test]
    fn test_active_filter_count_uses_committed_search() {
        let mut tl = Timeline::mounted();
        tl.ctl.change_facet("status", "new");
        tl.type_at(0, "ivan");
        assert_eq!(tl.ctl.active_filter_count(), 1);
        tl.advance_to(500);
        assert_eq!(tl.ctl.active_filter_count(), 2);
    }

    const SUPPORT_FACETS: &[FacetSpec] = &[FACET_TASK_ID, FACET_STATUS];
    const SUPPORT: FilterSchema = FilterSchema {
        facets: SUPPORT_FACETS,
    };

    #[test]
    fn test_typing_task_number_fetches_once() {
        let mut tl = Timeline::mounted_with(SUPPORT);
        tl.type_facet_at(0, "task_id", "1");
        tl.type_facet_at(100, "task_id", "10");
        tl.type_facet_at(200, "task_id", "104");
        tl.type_facet_at(300, "task_id", "1042");
        assert_eq!(tl.ctl.phase(), Phase::PendingDebounce);
        assert!(tl.ctl.selected("task_id").is_empty());

        tl.advance_to(5_000);
        assert_eq!(tl.fetches.len(), 1);
        let (at, _, filter) = &tl.fetches[0];
        assert_eq!(*at, 800);
        assert_eq!(
            filter.facet("task_id").unwrap().values(),
            &[FilterValue::from("1042")]
        );
    }

    #[test]
    fn test_task_number_keeps_spaces_while_typing() {
        let mut tl = Timeline::mounted_with(SUPPORT);
        tl.type_facet_at(0, "task_id", "1042 ");
        assert_eq!(tl.ctl.pending_input("task_id"), "1042 ");

        tl.advance_to(1_000);
        assert_eq!(tl.ctl.pending_input("task_id"), "1042 ");
        assert_eq!(tl.ctl.selected("task_id"), &[FilterValue::from("1042")]);

        // only whitespace added: the committed filter is the same
        tl.type_facet_at(1_000, "task_id", " 1042  ");
        tl.advance_to(3_000);
        assert_eq!(tl.fetches.len(), 1);
    }

    #[test]
    fn test_task_number_and_search_debounce_independently() {
        let mut tl = Timeline::mounted_with(SUPPORT);
        tl.type_at(0, "ivan");
        tl.type_facet_at(300, "task_id", "7");
        tl.advance_to(3_000);

        let commits: Vec<_> = tl
            .fetches
            .iter()
            .map(|(at, _, f)| (*at, f.search.clone(), f.facet("task_id").unwrap().len()))
            .collect();
        assert_eq!(commits, vec![(500, "ivan".to_string(), 0), (800, "ivan".to_string(), 1)]);
    }

    #[test]
    fn test_clearing_task_number_drops_pending_text() {
        let mut tl = Timeline::mounted_with(SUPPORT);
        tl.type_facet_at(0, "task_id", "55");
        tl.advance_to(600);
        tl.type_facet_at(600, "task_id", "555");

        let (_, filter) = fetch_parts(tl.ctl.clear_facet("task_id"));
        assert!(filter.facet("task_id").unwrap().is_empty());
        assert_eq!(tl.ctl.pending_input("task_id"), "");

        tl.advance_to(3_000);
        assert_eq!(tl.fetches.len(), 1);
    }
}
