use sortalgo::{bubble_sort, is_ascending, is_descending, merge_sort, shell_sort, Direction};

fn main() {
    let mut arr = vec![5, 3, 1, 4, 2];
    assert!(!is_ascending(&arr));
    bubble_sort(&mut arr, Direction::Ascending);
    assert_eq!(arr, vec![1, 2, 3, 4, 5]);
    assert!(is_ascending(&arr));

    let mut arr = vec![0.5, -1.5, 2.5, 0.0];
    shell_sort(&mut arr, Direction::Descending);
    assert_eq!(arr, vec![2.5, 0.5, 0.0, -1.5]);
    assert!(is_descending(&arr));

    let mut words = vec!["cherry", "banana", "apple", "date"];
    merge_sort(&mut words, Direction::Ascending);
    assert_eq!(words, vec!["apple", "banana", "cherry", "date"]);
    println!("sorted = {:?}", words);
}
