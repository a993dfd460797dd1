use celerity::{CircularQueue, QueueError};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    Enqueue(u16),
    Dequeue,
    Peek,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => Just(Op::Peek),
    ]
}

// Property: CircularQueue behaves like VecDeque used as a FIFO.
//  - dequeue/peek return the model's front, or Empty when the model is empty.
//  - len matches; capacity is a power of two that never shrinks and holds len.
//  - iter yields the model's elements front to back.
proptest! {
    #[test]
    fn prop_fifo_matches_vecdeque(capacity in 0usize..10, ops in proptest::collection::vec(arb_op(), 1..200)) {
        let mut q = CircularQueue::with_capacity(capacity);
        let mut model: VecDeque<u16> = VecDeque::new();
        let mut last_capacity = q.capacity();

        for op in ops {
            match op {
                Op::Enqueue(v) => {
                    q.enqueue(v);
                    model.push_back(v);
                }
                Op::Dequeue => {
                    prop_assert_eq!(q.dequeue(), model.pop_front().ok_or(QueueError::Empty));
                }
                Op::Peek => {
                    prop_assert_eq!(q.peek(), model.front().ok_or(QueueError::Empty));
                }
            }

            prop_assert_eq!(q.len(), model.len());
            prop_assert!(q.capacity().is_power_of_two());
            prop_assert!(q.capacity() >= last_capacity);
            prop_assert!(q.capacity() >= q.len());
            last_capacity = q.capacity();

            let seen: Vec<u16> = q.iter().copied().collect();
            let expected: Vec<u16> = model.iter().copied().collect();
            prop_assert_eq!(seen, expected);
        }
    }
}
