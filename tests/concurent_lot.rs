#![cfg(feature = "std")]

use linked_lot::{Departure, SharedParkingLot};

use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 16;
const ITEMS: usize = 200;
const RATE: f64 = 1.0;

#[test]
fn con_enter() {
    let lot = SharedParkingLot::new(THREADS * ITEMS / 2, RATE).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles = (0..THREADS)
        .map(|t| {
            let lot = lot.clone();
            let barrier = barrier.clone();

            thread::spawn(move || {
                barrier.wait();
                for i in 0..ITEMS {
                    lot.enter(format!("{t}-{i}"));
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }

    lot.with_lot(|lot| {
        assert_eq!(lot.vacant_spaces(), 0);
        assert_eq!(lot.waiting_len(), THREADS * ITEMS / 2);
    });
}

#[test]
fn con_enter_leave() {
    let lot = SharedParkingLot::new(THREADS / 2, RATE).unwrap();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles = (0..THREADS)
        .map(|t| {
            let lot = lot.clone();
            let barrier = barrier.clone();

            thread::spawn(move || {
                barrier.wait();
                let mut paid = 0;
                for i in 0..ITEMS {
                    let plate = format!("{t}-{i}");
                    lot.enter(plate.clone());
                    match lot.leave(&plate).unwrap() {
                        Departure::Parked { .. } => paid += 1,
                        Departure::Waiting { removed } => assert_eq!(removed, 1),
                    }
                }
                paid
            })
        })
        .collect::<Vec<_>>();

    let paid: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    lot.with_lot(|lot| {
        assert_eq!(lot.vacant_spaces(), lot.capacity());
        assert_eq!(lot.waiting_len(), 0);
        assert_eq!(lot.total_revenue(), paid as f64 * RATE);
    });
}
