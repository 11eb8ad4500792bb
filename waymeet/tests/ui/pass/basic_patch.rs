use waymeet::Patch;

#[derive(Patch, Debug, Clone, PartialEq)]
struct Profile {
    #[patch(skip)]
    id: String,
    name: String,
    age: u32,
    tags: Vec<String>,
}

fn main() {
    let mut profile = Profile {
        id: "p1".to_string(),
        name: "Ana".to_string(),
        age: 30,
        tags: Vec::new(),
    };

    let patch = ProfilePatch::new().name("Bia").age(31);
    assert!(!patch.is_empty());
    patch.apply(&mut profile);

    assert_eq!(profile.id, "p1");
    assert_eq!(profile.name, "Bia");
    assert_eq!(profile.age, 31);
    assert!(profile.tags.is_empty());
}
