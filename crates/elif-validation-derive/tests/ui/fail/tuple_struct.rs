use elif_validation::Validatable;

#[derive(Validatable)]
struct Pair(String, u32);

fn main() {}
