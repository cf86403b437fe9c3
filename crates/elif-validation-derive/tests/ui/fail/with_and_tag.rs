use elif_validation::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(with(Hello), tag = hello)]
    name: String,
}

fn main() {}
