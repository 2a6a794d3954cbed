use env_logger::Env;
use log::info;
use priority_queue::{MaxHeap, QueueError, Task, heapsort_array, heapsort_entries};

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1, 5, 0, 10),
        Task::new(2, 3, 1, 8),
        Task::new(3, 8, 2, 12),
        Task::new(4, 1, 3, 15),
    ]
}

fn main() -> Result<(), QueueError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let tasks = sample_tasks();

    let mut queue = MaxHeap::with_capacity(tasks.len());
    for &task in &tasks {
        queue.insert(task);
        info!("inserted: {task}");
    }

    info!("extracting tasks in order of priority");
    while !queue.is_empty() {
        info!("extracted: {}", queue.extract_max()?);
    }

    queue.extend(tasks.iter().copied());
    queue.increase_key(&4, 10)?;
    info!("raised task 4 to priority 10; next up: {}", queue.extract_max()?);

    info!("sorting tasks with heapsort");
    for task in heapsort_entries(tasks) {
        info!("{task}");
    }

    let mut values = [12, 11, 13, 5, 6, 7];
    info!("original array: {values:?}");
    heapsort_array(&mut values);
    info!("sorted array: {values:?}");

    Ok(())
}
