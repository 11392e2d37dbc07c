//! Multiplies a fixed 3x3 matrix by a fixed 3x4 matrix and prints the rows.

use freq_summarizer::matrix::Matrix;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let x = Matrix::from_rows(vec![vec![12, 7, 3], vec![4, 5, 6], vec![7, 8, 9]])?;
    let y = Matrix::from_rows(vec![
        vec![5, 8, 1, 2],
        vec![6, 7, 3, 0],
        vec![4, 5, 9, 1],
    ])?;

    let product = x.multiply(&y)?;
    println!("{product}");
    Ok(())
}
