use std::io::{self, Write};

use clap::Parser;
use safecalc::{
    evaluate_expression, exceeds_exponent_limit, interpreter::evaluator::core::EXPONENT_LIMIT,
    special,
};

/// safecalc is a guarded calculator: expressions are parsed and evaluated
/// against a strict operator allow-list, with a safety limit on exponents.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive prompt.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        run_expression(expression.trim().to_lowercase().as_str());
        return;
    }

    repl();
}

/// Runs the interactive prompt until `exit` or end of input.
fn repl() {
    println!("Welcome to safecalc!");
    println!("Type 'exit' to end the session.");

    loop {
        let Some(line) =
            prompt("\nEnter a mathematical expression or a special function (factorial, fibonacci, table): ")
        else {
            println!("\nGoodbye!");
            break;
        };

        let input = line.trim().to_lowercase();

        match input.as_str() {
            "" => {},
            "exit" => {
                println!("Thank you for using the calculator. Goodbye!");
                break;
            },
            "factorial" => run_factorial(),
            "fibonacci" => run_fibonacci(),
            "table" => run_table(),
            _ => run_expression(&input),
        }
    }
}

/// Evaluates one expression, printing the result or the error message.
///
/// The exponent pre-check runs before full evaluation and fails closed:
/// input it cannot parse is treated as exceeding the limit.
fn run_expression(source: &str) {
    if exceeds_exponent_limit(source) {
        println!("Exponent exceeds the limit of {EXPONENT_LIMIT}. Please enter a valid expression.");
        return;
    }

    match evaluate_expression(source) {
        Ok(value) => println!("Result: {value}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn run_factorial() {
    let Some(num) = prompt_number::<u64>("Enter a number to calculate its factorial: ") else {
        return;
    };

    match special::factorial(num) {
        Some(value) => println!("Factorial of {num}: {value}"),
        None => println!("Factorial of {num} is too large to represent."),
    }
}

fn run_fibonacci() {
    let Some(num) = prompt_number::<i64>("Enter a number to calculate its fibonacci: ") else {
        return;
    };

    match special::fibonacci(num) {
        Some(value) => println!("Fibonacci of {num}: {value}"),
        None => println!("Fibonacci of {num} is too large to represent."),
    }
}

fn run_table() {
    let Some(num) = prompt_number::<i64>("Enter a number for the table: ") else {
        return;
    };

    println!("Multiplication table for {num}:\n{}", special::table(num));
}

/// Prints a prompt and reads one line. Returns `None` at end of input.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Prompts for a number, reporting invalid input instead of retrying.
fn prompt_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    let line = prompt(text)?;

    match line.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            println!("Invalid input. Please enter a valid number.");
            None
        },
    }
}
