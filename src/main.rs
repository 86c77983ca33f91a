use calibration::WordTable;

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "input.txt".into());
    let input = match std::fs::read_to_string(&path) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("cannot read {}: {}", path, err);
            std::process::exit(1);
        }
    };

    let words = WordTable::spelled_out();
    println!("digits only: {}", calibration::total(&input, None));
    println!("with words:  {}", calibration::total(&input, Some(&words)));
}
