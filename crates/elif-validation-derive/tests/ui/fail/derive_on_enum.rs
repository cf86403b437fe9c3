use elif_validation::Validatable;

#[derive(Validatable)]
enum Status {
    Active,
}

fn main() {}
