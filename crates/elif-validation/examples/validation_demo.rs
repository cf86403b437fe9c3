//! Validation demo: tagged fields, nested values and a type-level check
//!
//! Run with `RUST_LOG=elif_validation=debug` to see dispatch decisions.

use elif_validation::validators::{email, not_blank, positive};
use elif_validation::{
    run_validation_on_bean, Validatable, ValidationEngine, ValidationError, Validator,
};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct TotalMatchesLines;

impl Validator for TotalMatchesLines {
    type Target = Order;

    fn validate(&self, input: &Order) -> Result<(), ValidationError> {
        let sum = input.lines.iter().try_fold(0u64, |acc, l| {
            l.quantity
                .checked_mul(l.unit_price)
                .and_then(|line| acc.checked_add(line))
        });
        let Some(sum) = sum else {
            return Err(ValidationError::with_code(
                "order total does not fit in 64 bits",
                "total_overflow",
            ));
        };

        if sum == input.total {
            Ok(())
        } else {
            Err(
                ValidationError::with_code("order total does not match its lines", "total_mismatch")
                    .context(serde_json::json!({ "expected": sum, "actual": input.total })),
            )
        }
    }
}

#[derive(Validatable)]
struct Line {
    #[validate(tag = not_blank)]
    sku: String,
    #[validate(tag = positive)]
    quantity: u64,
    #[validate(tag = positive)]
    unit_price: u64,
}

#[derive(Validatable)]
#[validate(with(TotalMatchesLines))]
struct Order {
    #[validate(tag = email)]
    customer_email: String,
    #[validate(nested)]
    lines: Vec<Line>,
    total: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("elif-validation Demo");
    println!("====================\n");

    let order = Order {
        customer_email: "buyer@example.com".to_string(),
        lines: vec![
            Line { sku: "BOOK-1".to_string(), quantity: 2, unit_price: 15 },
            Line { sku: "PEN-7".to_string(), quantity: 1, unit_price: 3 },
        ],
        total: 33,
    };

    run_validation_on_bean(&order)?;
    println!("valid order passed");

    let broken = Order {
        customer_email: "buyer-at-example".to_string(),
        lines: vec![Line { sku: " ".to_string(), quantity: 0, unit_price: 4 }],
        total: 10,
    };

    match run_validation_on_bean(&broken) {
        Ok(()) => println!("unexpected: broken order passed"),
        Err(err) => println!("fail-fast: [{}] {}", err.code(), err),
    }

    let engine = ValidationEngine::from_env()?;
    let report = engine.collect(&broken)?;
    println!("\n{report}");
    println!("\n{}", serde_json::to_string_pretty(&report.to_json())?);

    Ok(())
}
