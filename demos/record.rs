use sortalgo::{insert_sort, record, Direction};

fn main() {
    record::install(std::io::stdout()).unwrap();
    record::set_enabled(true);

    let mut arr = vec![5, 3, 1, 4, 2];
    log::info!("before sort = {:?}", arr);
    insert_sort(&mut arr, Direction::Ascending);
    log::info!("after sort = {:?}", arr);

    record::set_enabled(false);
    log::info!("this line is dropped");

    record::global()
        .error(format_args!("errors still reach stderr"))
        .unwrap();
}
