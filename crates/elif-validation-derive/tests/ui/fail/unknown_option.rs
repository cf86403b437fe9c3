use elif_validation::Validatable;

#[derive(Validatable)]
struct Signup {
    #[validate(required)]
    email: String,
}

fn main() {}
