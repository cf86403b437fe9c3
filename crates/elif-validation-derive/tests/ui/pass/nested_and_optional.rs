use std::sync::Arc;

use elif_validation::validators::not_blank;
use elif_validation::Validatable;

#[derive(Validatable)]
struct Tag {
    #[validate(tag = not_blank)]
    label: String,
}

#[derive(Validatable)]
struct Post {
    #[validate(tag = not_blank)]
    title: Option<String>,
    #[validate(nested)]
    tags: Vec<Tag>,
    #[validate(nested)]
    pinned: Option<Tag>,
    #[validate(nested)]
    shared: Arc<Tag>,
    #[validate(skip)]
    draft: bool,
}

fn main() {
    let post = Post {
        title: None,
        tags: Vec::new(),
        pinned: None,
        shared: Arc::new(Tag { label: "rust".into() }),
        draft: false,
    };
    let _ = post.draft;
    assert_eq!(post.fields().len(), 4);
}
