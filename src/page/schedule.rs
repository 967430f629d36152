use std::time::Duration;

use super::contact::DeferredAction;

/// Something that can run a [`DeferredAction`] later and take it back.
pub trait Scheduler {
    type Handle;

    fn schedule(&mut self, delay: Duration, action: DeferredAction) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Task {
    id: TaskId,
    due: Duration,
    action: DeferredAction,
}

/// A virtual clock. Nothing fires until the owner pulls due tasks out with
/// [`Timeline::pop_due`], so time only moves when a test says so.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
}

impl Timeline {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Removes the earliest task due at or before `until`, moving the clock to
    /// its due time. Ties go to the task scheduled first.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TaskId, DeferredAction)> {
        let (index, _) = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;
        let task = self.tasks.remove(index);
        self.now = self.now.max(task.due);
        Some((task.id, task.action))
    }

    /// Moves the clock forward without running anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for Timeline {
    type Handle = TaskId;

    fn schedule(&mut self, delay: Duration, action: DeferredAction) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            due: self.now + delay,
            action,
        });
        id
    }

    fn cancel(&mut self, handle: TaskId) {
        self.tasks.retain(|t| t.id != handle);
    }
}
