use elif_validation::Validatable;

#[derive(Validatable)]
struct Marker;

fn main() {}
