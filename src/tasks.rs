mod clock;
mod database_ext;
mod demo_tasks;
mod task_repository;

pub use self::{
    clock::{Clock, SystemClock},
    demo_tasks::demo_tasks,
    task_repository::TaskRepository,
};
