//! In-memory task store with injected persistence.

use tracing::{debug, warn};

use super::model::{Priority, Task};
use super::repository::TaskListRepository;
use super::sort::presentation_cmp;

/// The central state holder for the task list.
///
/// `TaskStore` owns the tasks for the current session, applies validation
/// on insert, toggles completion, removes tasks, and produces the sorted
/// view a renderer consumes. Every mutation persists the full list through
/// the injected [`TaskListRepository`].
///
/// Persistence failures never surface to the caller: a failed save leaves
/// the in-memory list authoritative for the session, and a failed or
/// malformed load yields an empty list. Both are logged.
pub struct TaskStore {
    /// Tasks in insertion order. Presentation order is computed on demand.
    tasks: Vec<Task>,
    repository: Box<dyn TaskListRepository>,
}

impl TaskStore {
    /// Creates a store over `repository`, loading whatever list it holds.
    ///
    /// A missing list (nothing stored yet, or the backing store was
    /// cleared) and a failed load are both treated as an empty list, so
    /// construction itself cannot fail.
    pub fn open(repository: Box<dyn TaskListRepository>) -> Self {
        let tasks = match repository.load() {
            Ok(Some(tasks)) => tasks,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to load stored tasks, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { tasks, repository }
    }

    /// Validates and appends a new task, then persists the list.
    ///
    /// The text is trimmed; whitespace-only input creates nothing and
    /// returns `None`. Otherwise the new task is appended to the end of
    /// the underlying list with a fresh id and `completed = false`.
    pub fn create(&mut self, text: &str, priority: Priority) -> Option<&Task> {
        let task = Task::new(text, priority)?;
        self.tasks.push(task);
        self.persist();
        self.tasks.last()
    }

    /// Flips the `completed` flag of the task with the given id.
    ///
    /// The task keeps its position in the underlying list; only the
    /// presentation order changes. Unknown ids are ignored.
    pub fn toggle_complete(&mut self, id: &str) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist();
            }
            None => debug!("toggle_complete: no task with id '{}', ignoring", id),
        }
    }

    /// Removes the task with the given id. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == len_before {
            debug!("delete: no task with id '{}', ignoring", id);
        } else {
            self.persist();
        }
    }

    /// Presentation-order projection of the task list.
    ///
    /// Recomputed on every call, never stored: priority ascending,
    /// incomplete before completed within a priority, ties by insertion
    /// order (stable sort). Calling it again restarts the sequence.
    pub fn sorted_view(&self) -> impl Iterator<Item = &Task> + '_ {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by(|a, b| presentation_cmp(a, b));
        view.into_iter()
    }

    /// Tasks in underlying (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Saves the full list, swallowing and logging failures.
    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.tasks) {
            warn!("failed to persist task list, keeping in-memory copy: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, TaskdeckError};
    use std::sync::{Arc, Mutex};

    /// Repository double backed by a shared slot, so two stores can see
    /// the same "storage" the way two page loads share browser storage.
    #[derive(Clone, Default)]
    struct SharedRepository {
        slot: Arc<Mutex<Option<Vec<Task>>>>,
    }

    impl TaskListRepository for SharedRepository {
        fn load(&self) -> Result<Option<Vec<Task>>> {
            Ok(self.slot.lock().unwrap().clone())
        }

        fn save(&self, tasks: &[Task]) -> Result<()> {
            *self.slot.lock().unwrap() = Some(tasks.to_vec());
            Ok(())
        }
    }

    /// Repository double whose every operation fails.
    struct BrokenRepository;

    impl TaskListRepository for BrokenRepository {
        fn load(&self) -> Result<Option<Vec<Task>>> {
            Err(TaskdeckError::data_access("storage unavailable"))
        }

        fn save(&self, _tasks: &[Task]) -> Result<()> {
            Err(TaskdeckError::data_access("storage unavailable"))
        }
    }

    fn empty_store() -> TaskStore {
        TaskStore::open(Box::new(SharedRepository::default()))
    }

    #[test]
    fn test_create_appends_task() {
        let mut store = empty_store();
        let task = store.create("測試任務1", Priority::High).unwrap();
        assert_eq!(task.text, "測試任務1");
        assert!(!task.completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_ignores_whitespace_only_text() {
        let mut store = empty_store();
        assert!(store.create("  ", Priority::Medium).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_complete_flips_only_completed() {
        let mut store = empty_store();
        let (id, text) = {
            let task = store.create("待完成任務", Priority::Medium).unwrap();
            (task.id.clone(), task.text.clone())
        };

        store.toggle_complete(&id);
        let task = &store.tasks()[0];
        assert!(task.completed);
        assert_eq!(task.id, id);
        assert_eq!(task.text, text);
        assert_eq!(task.priority, Priority::Medium);

        // Double application returns to the original state.
        store.toggle_complete(&id);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_complete_unknown_id_is_noop() {
        let mut store = empty_store();
        store.create("a", Priority::Low);
        store.toggle_complete("no-such-id");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_keeps_underlying_position() {
        let mut store = empty_store();
        store.create("first", Priority::High);
        let id = store.create("second", Priority::High).unwrap().id.clone();
        store.toggle_complete(&id);
        // Underlying order is untouched; only the view moves the task.
        assert_eq!(store.tasks()[1].id, id);
        let view: Vec<&str> = store.sorted_view().map(|t| t.text.as_str()).collect();
        assert_eq!(view, ["first", "second"]);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut store = empty_store();
        let id = store.create("a", Priority::High).unwrap().id.clone();
        store.create("b", Priority::Low);

        store.delete(&id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "b");
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = empty_store();
        store.create("a", Priority::High);
        store.delete("no-such-id");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_view_orders_by_priority() {
        let mut store = empty_store();
        store.create("低優先級任務", Priority::Low);
        store.create("高優先級任務", Priority::High);
        store.create("中優先級任務", Priority::Medium);

        let view: Vec<&str> = store.sorted_view().map(|t| t.text.as_str()).collect();
        assert_eq!(view, ["高優先級任務", "中優先級任務", "低優先級任務"]);
    }

    #[test]
    fn test_sorted_view_puts_completed_last_within_priority() {
        let mut store = empty_store();
        let done = store.create("done", Priority::Medium).unwrap().id.clone();
        store.create("open", Priority::Medium);
        store.toggle_complete(&done);

        let view: Vec<&str> = store.sorted_view().map(|t| t.text.as_str()).collect();
        assert_eq!(view, ["open", "done"]);
    }

    #[test]
    fn test_sorted_view_is_restartable_and_deterministic() {
        let mut store = empty_store();
        store.create("c", Priority::Low);
        store.create("a", Priority::High);
        store.create("b", Priority::Medium);

        let first: Vec<String> = store.sorted_view().map(|t| t.id.clone()).collect();
        let second: Vec<String> = store.sorted_view().map(|t| t.id.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_completed_tasks_keep_insertion_order() {
        let mut store = empty_store();
        let first = store.create("first done", Priority::High).unwrap().id.clone();
        let second = store.create("second done", Priority::High).unwrap().id.clone();
        store.toggle_complete(&second);
        store.toggle_complete(&first);

        // Both completed: relative order follows insertion, not completion
        // time.
        let view: Vec<&str> = store.sorted_view().map(|t| t.text.as_str()).collect();
        assert_eq!(view, ["first done", "second done"]);
    }

    #[test]
    fn test_reopen_restores_saved_list() {
        let repository = SharedRepository::default();

        let mut store = TaskStore::open(Box::new(repository.clone()));
        store.create("持久化測試任務", Priority::Medium);
        let saved = store.tasks().to_vec();

        let reopened = TaskStore::open(Box::new(repository));
        assert_eq!(reopened.tasks(), saved.as_slice());
    }

    #[test]
    fn test_broken_storage_degrades_to_empty_list() {
        let mut store = TaskStore::open(Box::new(BrokenRepository));
        assert!(store.is_empty());

        // Mutations still work against the in-memory copy.
        store.create("offline task", Priority::High);
        assert_eq!(store.len(), 1);
    }
}
