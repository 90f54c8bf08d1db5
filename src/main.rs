use std::time::Instant;

use sortalgo::{
    bubble_sort, insert_sort, is_ascending, is_descending, merge_sort, selection_sort, shell_sort,
    Direction,
};

const NAMES: [&str; 5] = ["bubble", "selection", "insert", "shell", "merge"];

fn main() {
    let times = 10;
    let mut cost_std = 0;
    let mut cost_algo = [0u128; 5];
    for _ in 0..times {
        for len in 1..500 {
            check_sort(len, &mut cost_std, &mut cost_algo);
        }
    }
    let cost_std = (cost_std / times as u128).max(1);
    println!("cost std sort time = {:?}us", cost_std);
    for (name, cost) in NAMES.iter().zip(cost_algo.iter()) {
        let cost = cost / times as u128;
        println!(
            "cost {} sort time = {:?}us, ratio = {:?}%",
            name,
            cost,
            (cost as f64 - cost_std as f64) / cost_std as f64 * 100f64
        );
    }
}

fn check_sort(len: usize, cost_std: &mut u128, cost_algo: &mut [u128; 5]) {
    let rands: Vec<usize> = (0..len)
        .map(|_| rand::random::<usize>() % (len * 10))
        .collect();

    let mut expect = rands.clone();
    let now = Instant::now();
    expect.sort();
    *cost_std += now.elapsed().as_micros();

    let sorts: [fn(&mut [usize], Direction); 5] = [
        bubble_sort,
        selection_sort,
        insert_sort,
        shell_sort,
        merge_sort,
    ];
    for (idx, sort) in sorts.iter().enumerate() {
        let mut copy_rands = rands.clone();
        let now = Instant::now();
        sort(&mut copy_rands, Direction::Ascending);
        cost_algo[idx] += now.elapsed().as_micros();
        assert!(copy_rands == expect);
        assert!(is_ascending(&copy_rands));

        sort(&mut copy_rands, Direction::Descending);
        assert!(is_descending(&copy_rands));
    }
}
