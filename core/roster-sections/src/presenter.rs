//! Sectioned list presentation.
//!
//! [`ListPresenter`] connects a [`Repository`] subscription to a [`ListView`]:
//! the initial result is sectioned and reloaded, every later change set is
//! turned into row operations, and store errors become alerts. Changing the
//! filter re-subscribes, which starts again from a full reload.

use crate::diff::{apply_change_set, BoundsPolicy, RowUpdate};
use crate::error::SectionResult;
use crate::layout::RowPath;
use crate::section::{section_records, section_titles, Section};
use roster_store::{Notification, Repository, SubscriptionHandle};
use roster_types::{FilterState, Record, Scope};
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, error};

/// Title of alerts raised for store errors.
const ERROR_ALERT_TITLE: &str = "Error";

/// The rendering side of a sectioned list.
pub trait ListView<T> {
    /// Replace everything on screen with `sections`.
    fn reload(&mut self, sections: &[Section<T>], index: &[String]);

    /// Animate from the previous sections to `sections` using `update`.
    fn apply_update(&mut self, update: &RowUpdate, sections: &[Section<T>], index: &[String]);

    /// Show a blocking message to the user.
    fn show_alert(&mut self, title: &str, message: &str);
}

/// Presenter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenterConfig {
    pub bounds_policy: BoundsPolicy,
}

struct PresenterState<T, V> {
    view: V,
    config: PresenterConfig,
    filter: FilterState,
    /// Flat result last delivered by the subscription.
    visible: Vec<T>,
    sections: Vec<Section<T>>,
    /// Jump-to-letter titles, always `section_titles(&sections)`.
    index: Vec<String>,
}

impl<T: Record, V: ListView<T>> PresenterState<T, V> {
    fn handle(&mut self, notification: &Notification<T>) {
        match notification {
            Notification::Initial(results) => {
                debug!("Initial result: {} records", results.len());
                self.replace(results.clone());
            }
            Notification::Update { results, changes } => {
                match apply_change_set(
                    &self.visible,
                    results,
                    changes,
                    T::section_key,
                    self.config.bounds_policy,
                ) {
                    Ok(update) => {
                        self.visible = results.clone();
                        self.sections = update.sections;
                        self.index = section_titles(&self.sections);
                        self.view.apply_update(&update.rows, &self.sections, &self.index);
                    }
                    Err(e) => {
                        error!("Discarding change set: {e}");
                        self.replace(results.clone());
                    }
                }
            }
            Notification::Error(e) => {
                self.view.show_alert(ERROR_ALERT_TITLE, &e.to_string());
            }
        }
    }

    fn replace(&mut self, results: Vec<T>) {
        self.sections = section_records(&results);
        self.index = section_titles(&self.sections);
        self.visible = results;
        self.view.reload(&self.sections, &self.index);
    }
}

/// Keeps a [`ListView`] in sync with the filtered contents of a repository.
///
/// The subscription lives as long as the presenter (or until [`stop`]), so a
/// dropped presenter is never called back.
///
/// [`stop`]: ListPresenter::stop
pub struct ListPresenter<T, R, V> {
    repository: R,
    state: Rc<RefCell<PresenterState<T, V>>>,
    subscription: Option<SubscriptionHandle>,
}

impl<T, R, V> ListPresenter<T, R, V>
where
    T: Record + 'static,
    R: Repository<T>,
    V: ListView<T> + 'static,
{
    pub fn new(repository: R, view: V, config: PresenterConfig) -> Self {
        Self {
            repository,
            state: Rc::new(RefCell::new(PresenterState {
                view,
                config,
                filter: FilterState::default(),
                visible: Vec::new(),
                sections: Vec::new(),
                index: Vec::new(),
            })),
            subscription: None,
        }
    }

    /// Subscribes with the current filter. The view is reloaded before this
    /// returns.
    pub fn start(&mut self) -> SectionResult<()> {
        self.resubscribe()
    }

    /// Releases the subscription. The view keeps its last contents.
    pub fn stop(&mut self) {
        if let Some(handle) = self.subscription.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    /// Switches between all records and active ones. Clears the search text.
    pub fn set_scope(&mut self, scope: Scope) -> SectionResult<()> {
        self.state.borrow_mut().filter.set_scope(scope);
        self.refilter()
    }

    /// Sets the search text. Empty text removes the text predicate.
    pub fn set_search_text(&mut self, text: &str) -> SectionResult<()> {
        self.state.borrow_mut().filter.set_search_text(text);
        self.refilter()
    }

    pub fn clear_search(&mut self) -> SectionResult<()> {
        self.state.borrow_mut().filter.clear_search();
        self.refilter()
    }

    pub fn filter(&self) -> FilterState {
        self.state.borrow().filter.clone()
    }

    fn refilter(&mut self) -> SectionResult<()> {
        if self.is_running() {
            self.resubscribe()
        } else {
            Ok(())
        }
    }

    fn resubscribe(&mut self) -> SectionResult<()> {
        self.stop();
        // no borrow of `state` may be held here: the initial notification
        // is delivered synchronously
        let filter = self.state.borrow().filter.to_filter();
        let weak: Weak<RefCell<PresenterState<T, V>>> = Rc::downgrade(&self.state);
        let handle = self.repository.subscribe(
            filter,
            Box::new(move |notification: &Notification<T>| {
                if let Some(state) = weak.upgrade() {
                    state.borrow_mut().handle(notification);
                }
            }),
        )?;
        self.subscription = Some(handle);
        Ok(())
    }
}

impl<T, R, V> ListPresenter<T, R, V>
where
    T: Record,
{
    pub fn sections(&self) -> Ref<'_, [Section<T>]> {
        Ref::map(self.state.borrow(), |s| s.sections.as_slice())
    }

    /// Titles for the jump-to-letter control.
    pub fn index_titles(&self) -> Vec<String> {
        self.state.borrow().index.clone()
    }

    /// The flat list currently on screen.
    pub fn visible(&self) -> Vec<T> {
        self.state.borrow().visible.clone()
    }

    pub fn view(&self) -> Ref<'_, V> {
        Ref::map(self.state.borrow(), |s| &s.view)
    }

    pub fn section_count(&self) -> usize {
        self.state.borrow().sections.len()
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.state
            .borrow()
            .sections
            .get(section)
            .map_or(0, Section::len)
    }

    pub fn header(&self, section: usize) -> Option<String> {
        self.state.borrow().sections.get(section).map(|s| s.title.clone())
    }

    pub fn item(&self, path: RowPath) -> Option<T> {
        self.state
            .borrow()
            .sections
            .get(path.section)
            .and_then(|s| s.items.get(path.item))
            .cloned()
    }

    /// First row of the section titled `title`.
    pub fn jump_target(&self, title: &str) -> Option<RowPath> {
        self.state
            .borrow()
            .index
            .iter()
            .position(|t| t == title)
            .map(|section| RowPath::new(section, 0))
    }

    /// Title under a drag at `offset` along an index control of `extent`,
    /// with titles laid out evenly.
    pub fn title_at_offset(&self, offset: f64, extent: f64) -> Option<String> {
        let state = self.state.borrow();
        let count = state.index.len();
        if count == 0 || extent <= 0.0 || offset < 0.0 || offset >= extent {
            return None;
        }
        let slot = (offset / (extent / count as f64)) as usize;
        state.index.get(slot.min(count - 1)).cloned()
    }
}

impl<T, R, V> Drop for ListPresenter<T, R, V> {
    fn drop(&mut self) {
        if self.subscription.take().is_some() {
            debug!("List presenter dropped, subscription released");
        }
    }
}
