pub mod contact;
pub mod filter;
pub mod schedule;
pub mod sections;

use std::time::Duration;

use crate::content::{Content, Project, SkillCategory};
use contact::{ContactForm, DeferredAction, FormErrors, FormField, FormState, SubmissionStatus};
use filter::{categories, filter_projects, ALL_CATEGORIES};
use schedule::{Scheduler, Timeline};
use sections::{Navigation, ScrollTo, Section, SectionLayout};

/// Everything the views need to draw the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    pub active_section: Section,
    pub menu_open: bool,
    pub form_state: FormState,
    pub form_errors: FormErrors,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub query: String,
    pub filtered_projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
}

/// Owns all interactive state of the page. Views send events in and read a
/// [`RenderModel`] back out; nothing is shared with the views directly.
///
/// Timed form transitions go through `S`. The controller holds the handle of
/// whatever is pending and cancels it on [`PageController::teardown`], which
/// also runs on drop.
pub struct PageController<S: Scheduler> {
    content: Content,
    categories: Vec<String>,
    selected_category: String,
    query: String,
    navigation: Navigation,
    form: ContactForm,
    scheduler: S,
    pending: Option<(DeferredAction, S::Handle)>,
}

impl<S: Scheduler> PageController<S> {
    pub fn new(content: Content, scheduler: S) -> Self {
        let categories = categories(content.projects());
        Self {
            content,
            categories,
            selected_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            navigation: Navigation::default(),
            form: ContactForm::default(),
            scheduler,
            pending: None,
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn filtered_projects(&self) -> Vec<Project> {
        filter_projects(
            self.content.projects(),
            &self.selected_category,
            &self.query,
        )
    }

    pub fn edit(&mut self, field: FormField, value: impl Into<String>) {
        self.form.edit(field, value);
    }

    pub fn submit(&mut self) {
        if let Some(action) = self.form.submit() {
            self.defer(action);
        }
    }

    /// Delivers a deferred action scheduled earlier through `S`.
    ///
    /// A stale action leaves the pending timer in place.
    pub fn fire(&mut self, action: DeferredAction) {
        if matches!(self.pending, Some((scheduled, _)) if scheduled == action) {
            self.pending = None;
        }
        if let Some(next) = self.form.apply(action) {
            self.defer(next);
        }
    }

    fn defer(&mut self, action: DeferredAction) {
        if let Some((_, stale)) = self.pending.take() {
            self.scheduler.cancel(stale);
        }
        let handle = self.scheduler.schedule(action.delay(), action);
        self.pending = Some((action, handle));
    }

    /// Returns `true` when the active section changed.
    pub fn on_scroll(&mut self, layout: &impl SectionLayout, scroll_y: f64) -> bool {
        self.navigation.on_scroll(layout, scroll_y)
    }

    pub fn navigate_to(
        &mut self,
        layout: &impl SectionLayout,
        section: Section,
    ) -> Option<ScrollTo> {
        self.navigation.navigate_to(layout, section)
    }

    pub fn toggle_menu(&mut self) {
        self.navigation.toggle_menu();
    }

    /// Cancels anything still scheduled. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            log::debug!("cancelling pending contact form transition");
            self.scheduler.cancel(handle);
        }
    }

    pub fn snapshot(&self) -> RenderModel {
        RenderModel {
            active_section: self.navigation.active(),
            menu_open: self.navigation.menu_open(),
            form_state: self.form.state().clone(),
            form_errors: self.form.errors().clone(),
            is_submitting: self.form.status() == SubmissionStatus::Submitting,
            is_submitted: self.form.status() == SubmissionStatus::Submitted,
            categories: self.categories.clone(),
            selected_category: self.selected_category.clone(),
            query: self.query.clone(),
            filtered_projects: self.filtered_projects(),
            skills: self.content.skills().to_vec(),
        }
    }
}

impl PageController<Timeline> {
    /// Runs virtual time forward, delivering every action that comes due on
    /// the way, including ones scheduled by earlier deliveries.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some((_, action)) = self.scheduler.pop_due(until) {
            self.fire(action);
        }
        self.scheduler.set_now(until);
    }
}

impl<S: Scheduler> Drop for PageController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::project;
    use super::sections::Bounds;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller() -> PageController<Timeline> {
        let projects = vec![
            project("1", "Shop", "Web", &["React"]),
            project("2", "Vision", "AI", &["Python"]),
            project("3", "Blog", "Web", &["Rust", "Leptos"]),
        ];
        let content = Content::new(projects, Vec::new()).unwrap();
        PageController::new(content, Timeline::default())
    }

    fn fill(page: &mut PageController<impl Scheduler>) {
        page.edit(FormField::Name, "Ann");
        page.edit(FormField::Email, "a@b.co");
        page.edit(FormField::Message, "hi");
    }

    fn layout(section: Section) -> Option<Bounds> {
        let index = Section::ALL.iter().position(|s| *s == section)?;
        Some(Bounds {
            top: index as f64 * 1000.0,
            height: 1000.0,
        })
    }

    #[test]
    fn test_initial_snapshot() {
        let page = controller();
        let model = page.snapshot();
        assert_eq!(model.active_section, Section::Hero);
        assert!(!model.menu_open);
        assert_eq!(model.categories, vec!["All", "Web", "AI"]);
        assert_eq!(model.selected_category, "All");
        assert_eq!(model.filtered_projects.len(), 3);
        assert_eq!(model.skills, Content::builtin().unwrap().skills());
        assert!(!model.is_submitting);
        assert!(!model.is_submitted);
    }

    #[test]
    fn test_gallery_filters() {
        let mut page = controller();
        page.select_category("Web");
        let titles: Vec<_> = page
            .snapshot()
            .filtered_projects
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Shop", "Blog"]);

        page.set_query("LEPTOS");
        assert_eq!(page.filtered_projects().len(), 1);

        page.select_category("AI");
        assert!(page.filtered_projects().is_empty());
    }

    #[test]
    fn test_submission_timing() {
        let mut page = controller();
        fill(&mut page);
        page.submit();
        let model = page.snapshot();
        assert!(model.is_submitting);
        assert_eq!(model.form_state.name, "Ann");

        page.advance(ms(1499));
        assert!(page.snapshot().is_submitting);

        page.advance(ms(1));
        let model = page.snapshot();
        assert!(!model.is_submitting);
        assert!(model.is_submitted);
        assert_eq!(model.form_state, FormState::default());

        page.advance(ms(4999));
        assert!(page.snapshot().is_submitted);

        page.advance(ms(1));
        let model = page.snapshot();
        assert!(!model.is_submitted);
        assert_eq!(page.form().status(), SubmissionStatus::Idle);
        assert_eq!(page.scheduler().pending(), 0);
    }

    #[test]
    fn test_whole_sequence_in_one_step() {
        let mut page = controller();
        fill(&mut page);
        page.submit();
        page.advance(ms(10_000));
        assert_eq!(page.form().status(), SubmissionStatus::Idle);
        assert_eq!(page.scheduler().now(), ms(10_000));
    }

    #[test]
    fn test_invalid_submit_schedules_nothing() {
        let mut page = controller();
        page.edit(FormField::Name, "Ann");
        page.submit();
        assert_eq!(page.scheduler().pending(), 0);
        let model = page.snapshot();
        assert_eq!(model.form_errors.email, "Email is required");
        assert_eq!(model.form_errors.name, "");

        page.edit(FormField::Email, "x");
        assert_eq!(page.snapshot().form_errors.email, "");
        assert_eq!(page.snapshot().form_errors.message, "Message is required");
    }

    #[test]
    fn test_teardown_cancels_pending() {
        let mut page = controller();
        fill(&mut page);
        page.submit();
        assert_eq!(page.scheduler().pending(), 1);

        page.teardown();
        assert_eq!(page.scheduler().pending(), 0);
        page.advance(ms(10_000));
        assert!(page.snapshot().is_submitting);
        page.teardown();
    }

    #[test]
    fn test_teardown_after_stale_action() {
        let mut page = controller();
        fill(&mut page);
        page.submit();
        page.fire(DeferredAction::ResetStatus);
        assert!(page.snapshot().is_submitting);
        assert_eq!(page.scheduler().pending(), 1);

        page.teardown();
        assert_eq!(page.scheduler().pending(), 0);
    }

    #[derive(Clone, Default)]
    struct Recorder {
        scheduled: Rc<RefCell<Vec<(u32, DeferredAction)>>>,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Scheduler for Recorder {
        type Handle = u32;

        fn schedule(&mut self, _delay: Duration, action: DeferredAction) -> u32 {
            let mut scheduled = self.scheduled.borrow_mut();
            let id = scheduled.len() as u32;
            scheduled.push((id, action));
            id
        }

        fn cancel(&mut self, handle: u32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }

    #[test]
    fn test_drop_cancels_pending() {
        let recorder = Recorder::default();
        {
            let mut page = PageController::new(Content::builtin().unwrap(), recorder.clone());
            fill(&mut page);
            page.submit();
            page.fire(DeferredAction::CompleteSubmission);
        }
        assert_eq!(
            *recorder.scheduled.borrow(),
            vec![
                (0, DeferredAction::CompleteSubmission),
                (1, DeferredAction::ResetStatus)
            ]
        );
        assert_eq!(*recorder.cancelled.borrow(), vec![1]);
    }

    #[test]
    fn test_drop_when_idle_cancels_nothing() {
        let recorder = Recorder::default();
        drop(PageController::new(
            Content::builtin().unwrap(),
            recorder.clone(),
        ));
        assert!(recorder.cancelled.borrow().is_empty());
    }

    #[test]
    fn test_scroll_and_navigation() {
        let mut page = controller();
        assert!(page.on_scroll(&layout, 950.0));
        assert_eq!(page.snapshot().active_section, Section::Projects);
        assert!(page.on_scroll(&layout, 2000.0));
        assert_eq!(page.snapshot().active_section, Section::Skills);

        page.toggle_menu();
        assert!(page.snapshot().menu_open);
        assert_eq!(
            page.navigate_to(&layout, Section::Contact),
            Some(ScrollTo { top: 2920.0 })
        );
        let model = page.snapshot();
        assert_eq!(model.active_section, Section::Contact);
        assert!(!model.menu_open);
    }
}
