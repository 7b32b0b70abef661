use std::collections::VecDeque;

use criterion::{criterion_group, criterion_main, Criterion};
use linked_lot::{ParkingLot, Queue};

const ITEMS: usize = 1000;

fn fifo(c: &mut Criterion) {
    c.bench_function("queue-linked-lot", |b| b.iter(run::<Queue<usize>>));
    c.bench_function("queue-vec-deque", |b| b.iter(run::<VecDeque<usize>>));
    c.bench_function("queue-seg-queue", |b| {
        b.iter(run::<crossbeam_queue::SegQueue<usize>>)
    });
}

fn parking_churn(c: &mut Criterion) {
    c.bench_function("parking-lot-churn", |b| {
        b.iter(|| {
            let mut lot = ParkingLot::new(64, 1.0).unwrap();
            for i in 0..ITEMS {
                lot.enter(i.to_string());
                if i >= 64 {
                    lot.leave(&(i - 64).to_string()).unwrap();
                }
            }
            lot.total_revenue()
        })
    });
}

trait Fifo<T> {
    fn new() -> Self;
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

fn run<T>()
where
    T: Fifo<usize>,
{
    let mut queue = T::new();
    for i in 0..ITEMS {
        queue.push(i);
        queue.push(i);
        assert!(queue.pop().is_some());
    }
    for _ in 0..ITEMS {
        assert!(queue.pop().is_some());
    }
    assert!(queue.pop().is_none());
    assert!(queue.is_empty());
}

impl<T> Fifo<T> for Queue<T> {
    fn new() -> Self {
        Queue::new()
    }

    fn push(&mut self, value: T) {
        self.enqueue(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.dequeue().ok()
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }
}

impl<T> Fifo<T> for VecDeque<T> {
    fn new() -> Self {
        VecDeque::new()
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Fifo<T> for crossbeam_queue::SegQueue<T> {
    fn new() -> Self {
        crossbeam_queue::SegQueue::new()
    }

    fn push(&mut self, value: T) {
        crossbeam_queue::SegQueue::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        crossbeam_queue::SegQueue::pop(self)
    }

    fn is_empty(&self) -> bool {
        crossbeam_queue::SegQueue::is_empty(self)
    }
}

criterion_group!(benches, fifo, parking_churn);
criterion_main!(benches);
