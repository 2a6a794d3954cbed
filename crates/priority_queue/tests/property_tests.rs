//! Property-based tests using proptest
//!
//! Random operation sequences are replayed against a `MaxHeap` and a plain
//! `Vec` model; the heap must agree with the model after every step.

use priority_queue::{MaxHeap, QueueError, Task, heapsort_array, heapsort_entries};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(i64),
    ExtractMax,
    IncreaseKey { slot: usize, delta: i64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-1_000_i64..1_000).prop_map(Op::Insert),
        3 => Just(Op::ExtractMax),
        2 => (any::<usize>(), 0_i64..500).prop_map(|(slot, delta)| Op::IncreaseKey { slot, delta }),
    ]
}

fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap: MaxHeap<Task> = MaxHeap::new();
    let mut model: Vec<Task> = Vec::new();
    let mut next_id = 0_u64;

    for op in ops {
        let len_before = heap.len();
        match op {
            Op::Insert(priority) => {
                let task = Task::new(next_id, priority, next_id, next_id + 1);
                next_id += 1;
                heap.insert(task);
                model.push(task);
                prop_assert_eq!(heap.len(), len_before + 1);
            }
            Op::ExtractMax => match heap.extract_max() {
                Ok(task) => {
                    let max = model.iter().map(|t| t.priority).max();
                    prop_assert_eq!(Some(task.priority), max);
                    let pos = model.iter().position(|t| t.id == task.id);
                    prop_assert!(pos.is_some());
                    model.swap_remove(pos.unwrap());
                    prop_assert_eq!(heap.len(), len_before - 1);
                }
                Err(err) => {
                    prop_assert_eq!(err, QueueError::EmptyStructure);
                    prop_assert!(model.is_empty());
                }
            },
            Op::IncreaseKey { slot, delta } => {
                if model.is_empty() {
                    prop_assert_eq!(heap.increase_key(&0, 0), Err(QueueError::NotFound));
                } else {
                    let slot = slot % model.len();
                    let raised = model[slot].priority + delta;
                    prop_assert_eq!(heap.increase_key(&model[slot].id, raised), Ok(()));
                    model[slot].priority = raised;
                }
                prop_assert_eq!(heap.len(), len_before);
            }
        }

        prop_assert!(heap.is_valid_heap());
        let root = heap.peek().map(|t| t.priority);
        prop_assert_eq!(root, model.iter().map(|t| t.priority).max());
    }

    let mut expected = model.clone();
    expected.sort_unstable_by(|a, b| b.priority.cmp(&a.priority));
    let drained = heap.into_sorted_vec();
    prop_assert_eq!(
        drained.iter().map(|t| t.priority).collect::<Vec<_>>(),
        expected.iter().map(|t| t.priority).collect::<Vec<_>>()
    );

    let mut drained_ids = drained.iter().map(|t| t.id).collect::<Vec<_>>();
    let mut model_ids = model.iter().map(|t| t.id).collect::<Vec<_>>();
    drained_ids.sort_unstable();
    model_ids.sort_unstable();
    prop_assert_eq!(drained_ids, model_ids);

    Ok(())
}

proptest! {
    #[test]
    fn heap_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_ops(ops)?;
    }

    #[test]
    fn extraction_is_non_increasing(priorities in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut heap = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| Task::new(i as u64, p, 0, 0))
            .collect::<MaxHeap<_>>();

        let mut last = None;
        let mut count = 0;
        while let Ok(task) = heap.extract_max() {
            if let Some(prev) = last {
                prop_assert!(task.priority <= prev);
            }
            last = Some(task.priority);
            count += 1;
        }
        prop_assert_eq!(count, priorities.len());
    }

    #[test]
    fn decrease_is_rejected(priorities in prop::collection::vec(-100_i64..100, 1..50), pick in any::<usize>()) {
        let mut heap = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| Task::new(i as u64, p, 0, 0))
            .collect::<MaxHeap<_>>();
        let before = heap.as_slice().to_vec();

        let id = (pick % priorities.len()) as u64;
        let lowered = priorities[id as usize] - 1;
        prop_assert_eq!(heap.increase_key(&id, lowered), Err(QueueError::InvalidPriorityChange));
        prop_assert_eq!(heap.as_slice(), before.as_slice());
    }

    #[test]
    fn heapsort_array_sorts(data in prop::collection::vec(any::<i64>(), 0..500)) {
        let mut actual = data.clone();
        heapsort_array(&mut actual);

        let mut expected = data;
        expected.sort_unstable();
        prop_assert_eq!(&actual, &expected);

        heapsort_array(&mut actual);
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn heapsort_entries_sorts_descending(priorities in prop::collection::vec(-50_i64..50, 0..300)) {
        let tasks = priorities
            .iter()
            .enumerate()
            .map(|(i, &p)| Task::new(i as u64, p, 0, 0))
            .collect::<Vec<_>>();
        let sorted = heapsort_entries(tasks);

        prop_assert_eq!(sorted.len(), priorities.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].priority >= w[1].priority));

        let mut expected = priorities;
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(sorted.iter().map(|t| t.priority).collect::<Vec<_>>(), expected);
    }
}
