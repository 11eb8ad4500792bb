//! Static sample catalogue standing in for a backend.
//!
//! Stores clone from here when they are created or refreshed, so every process
//! starts from the same data.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

use crate::types::{Category, ChatMessage, Event, Itinerary, Place, User};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

fn user(id: &str, email: &str, name: &str, city: &str, bio: &str, followers: u32, following: u32) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        display_name: name.to_string(),
        avatar_url: format!("https://i.pravatar.cc/150?u={id}"),
        cover_photo_url: format!("https://picsum.photos/seed/cover{id}/800/300"),
        home_city: city.to_string(),
        bio: bio.to_string(),
        selected_categories: Vec::new(),
        followers_count: followers,
        following_count: following,
        created_at: at(1_704_067_200),
        email_verified: true,
        gdpr_consent: true,
    }
}

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        user(
            "1",
            "ana@waymeet.app",
            "Ana Souza",
            "Londrina, PR",
            "Sempre em busca do próximo rolê.",
            248,
            181,
        ),
        user("2", "bruno@waymeet.app", "Bruno Lima", "Londrina, PR", "Corredor de rua e fã de café.", 97, 120),
        user("3", "carla@waymeet.app", "Carla Mendes", "Maringá, PR", "Fotografia e trilhas.", 512, 300),
        user("4", "diego@waymeet.app", "Diego Rocha", "Curitiba, PR", "Dev de dia, DJ de noite.", 1_034, 88),
    ]
});

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    [
        ("1", "Música", "🎵", "#FF6B6B"),
        ("2", "Gastronomia", "🍽️", "#FFA94D"),
        ("3", "Esportes", "⚽", "#51CF66"),
        ("4", "Arte", "🎨", "#CC5DE8"),
        ("5", "Natureza", "🌿", "#20C997"),
        ("6", "Tecnologia", "💻", "#339AF0"),
        ("7", "Festa", "🎉", "#F06595"),
        ("8", "Cultura", "🎭", "#FCC419"),
    ]
    .into_iter()
    .map(|(id, name, icon, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    })
    .collect()
});

struct EventSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    date: &'static str,
    time: &'static str,
    latitude: f64,
    longitude: f64,
    location_name: &'static str,
    creator: usize,
    attendees: &'static [usize],
    max_participants: u32,
    price: f64,
}

const EVENT_SEEDS: &[EventSeed] = &[
    EventSeed {
        id: "1",
        title: "Sunset no Lago Igapó",
        description: "Encontro para ver o pôr do sol com música ao vivo.",
        category: "Música",
        date: "2025-03-15",
        time: "17:30",
        latitude: -23.3312,
        longitude: -51.1650,
        location_name: "Lago Igapó II",
        creator: 0,
        attendees: &[0, 1, 2],
        max_participants: 30,
        price: 0.0,
    },
    EventSeed {
        id: "2",
        title: "Festival de Food Trucks",
        description: "Mais de 20 food trucks e cerveja artesanal.",
        category: "Gastronomia",
        date: "2025-03-16",
        time: "12:00",
        latitude: -23.3100,
        longitude: -51.1590,
        location_name: "Aterro do Lago",
        creator: 1,
        attendees: &[1, 3],
        max_participants: 200,
        price: 25.0,
    },
    EventSeed {
        id: "3",
        title: "Corrida Noturna 5K",
        description: "Percurso iluminado pelo centro da cidade.",
        category: "Esportes",
        date: "2025-03-20",
        time: "20:00",
        latitude: -23.3045,
        longitude: -51.1696,
        location_name: "Calçadão de Londrina",
        creator: 1,
        attendees: &[1],
        max_participants: 50,
        price: 45.0,
    },
    EventSeed {
        id: "4",
        title: "Vernissage Arte Urbana",
        description: "Abertura da exposição coletiva de grafite.",
        category: "Arte",
        date: "2025-03-22",
        time: "19:00",
        latitude: -23.3080,
        longitude: -51.1620,
        location_name: "Museu de Arte de Londrina",
        creator: 2,
        attendees: &[2, 0],
        max_participants: 80,
        price: 0.0,
    },
    EventSeed {
        id: "5",
        title: "Trilha Mata dos Godoy",
        description: "Trilha guiada de 8 km com pausa para piquenique.",
        category: "Natureza",
        date: "2025-03-23",
        time: "07:00",
        latitude: -23.4420,
        longitude: -51.2480,
        location_name: "Parque Estadual Mata dos Godoy",
        creator: 2,
        attendees: &[2],
        max_participants: 15,
        price: 80.0,
    },
    EventSeed {
        id: "6",
        title: "Hackathon Cidade Inteligente",
        description: "36 horas construindo soluções para a cidade.",
        category: "Tecnologia",
        date: "2025-04-05",
        time: "09:00",
        latitude: -25.4284,
        longitude: -49.2733,
        location_name: "Hub de Inovação Curitiba",
        creator: 3,
        attendees: &[3],
        max_participants: 120,
        price: 150.0,
    },
];

static EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    EVENT_SEEDS
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let creator = USERS[seed.creator].clone();
            Event {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                image_url: format!("https://picsum.photos/seed/event{}/400/300", seed.id),
                category: seed.category.to_string(),
                date: seed.date.to_string(),
                time: seed.time.to_string(),
                latitude: seed.latitude,
                longitude: seed.longitude,
                location_name: seed.location_name.to_string(),
                creator_id: creator.id.clone(),
                creator,
                attendees: seed.attendees.iter().map(|&i| USERS[i].clone()).collect(),
                max_participants: seed.max_participants,
                price: seed.price,
                is_public: true,
                created_at: at(1_740_000_000 + index as i64 * 3_600),
            }
        })
        .collect()
});

static MESSAGES: Lazy<Vec<ChatMessage>> = Lazy::new(|| {
    [
        ("m1", 0, "Gente, alguém leva caixa de som?", false),
        ("m2", 1, "Eu levo! E uma canga extra.", false),
        ("m3", 2, "Carla Mendes entrou no grupo", true),
        ("m4", 2, "Chego às 17h, guardem um lugar 😄", false),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (id, author, text, is_system))| ChatMessage {
        id: id.to_string(),
        event_id: "1".to_string(),
        user_id: if is_system { "system".to_string() } else { USERS[author].id.clone() },
        user: if is_system { USERS[0].clone() } else { USERS[author].clone() },
        text: text.to_string(),
        timestamp: at(1_741_900_000 + index as i64 * 300),
        is_system,
    })
    .collect()
});

static PLACES: Lazy<Vec<Place>> = Lazy::new(|| {
    vec![
        Place {
            id: "1".to_string(),
            name: "Lago Igapó".to_string(),
            description: "Cartão-postal da cidade, ótimo para caminhar.".to_string(),
            image_url: "https://picsum.photos/seed/place1/400/300".to_string(),
            rating: 4.8,
            address: "Av. Higienópolis, s/n".to_string(),
            city: "Londrina".to_string(),
            category: "Natureza".to_string(),
            category_icons: vec!["🌿".to_string(), "🚴".to_string()],
            latitude: -23.3312,
            longitude: -51.1650,
        },
        Place {
            id: "2".to_string(),
            name: "Catedral Metropolitana".to_string(),
            description: "Arquitetura moderna no coração do centro.".to_string(),
            image_url: "https://picsum.photos/seed/place2/400/300".to_string(),
            rating: 4.6,
            address: "Praça Mal. Floriano Peixoto".to_string(),
            city: "Londrina".to_string(),
            category: "Cultura".to_string(),
            category_icons: vec!["🎭".to_string()],
            latitude: -23.3105,
            longitude: -51.1626,
        },
        Place {
            id: "3".to_string(),
            name: "Jardim Botânico de Curitiba".to_string(),
            description: "Estufa de vidro e jardins franceses.".to_string(),
            image_url: "https://picsum.photos/seed/place3/400/300".to_string(),
            rating: 4.9,
            address: "R. Eng. Ostoja Roguski".to_string(),
            city: "Curitiba".to_string(),
            category: "Natureza".to_string(),
            category_icons: vec!["🌿".to_string(), "📸".to_string()],
            latitude: -25.4425,
            longitude: -49.2389,
        },
        Place {
            id: "4".to_string(),
            name: "Mercado Municipal".to_string(),
            description: "Pastel, caldo de cana e produtores locais.".to_string(),
            image_url: "https://picsum.photos/seed/place4/400/300".to_string(),
            rating: 4.4,
            address: "R. Pernambuco, 1200".to_string(),
            city: "Londrina".to_string(),
            category: "Gastronomia".to_string(),
            category_icons: vec!["🍽️".to_string()],
            latitude: -23.3071,
            longitude: -51.1561,
        },
    ]
});

static ITINERARIES: Lazy<Vec<Itinerary>> = Lazy::new(|| {
    vec![
        Itinerary {
            id: "1".to_string(),
            title: "Londrina em um dia".to_string(),
            description: "Do café da manhã no centro ao pôr do sol no lago.".to_string(),
            image_url: "https://picsum.photos/seed/itinerary1/400/300".to_string(),
            rating: 4.7,
            locations: vec![
                "Mercado Municipal".to_string(),
                "Catedral Metropolitana".to_string(),
                "Lago Igapó".to_string(),
            ],
            category: "Cultura".to_string(),
            creator: USERS[0].clone(),
            created_at: at(1_735_000_000),
            duration: "1 dia".to_string(),
            price: 0.0,
        },
        Itinerary {
            id: "2".to_string(),
            title: "Rota dos Parques de Curitiba".to_string(),
            description: "Cinco parques em um fim de semana.".to_string(),
            image_url: "https://picsum.photos/seed/itinerary2/400/300".to_string(),
            rating: 4.9,
            locations: vec![
                "Jardim Botânico".to_string(),
                "Parque Barigui".to_string(),
                "Ópera de Arame".to_string(),
            ],
            category: "Natureza".to_string(),
            creator: USERS[2].clone(),
            created_at: at(1_736_000_000),
            duration: "2 dias".to_string(),
            price: 120.0,
        },
        Itinerary {
            id: "3".to_string(),
            title: "Buenos Aires gastronômica".to_string(),
            description: "Parrillas, cafés notáveis e doce de leite.".to_string(),
            image_url: "https://picsum.photos/seed/itinerary3/400/300".to_string(),
            rating: 4.8,
            locations: vec!["San Telmo".to_string(), "Palermo".to_string(), "Recoleta".to_string()],
            category: "Gastronomia".to_string(),
            creator: USERS[3].clone(),
            created_at: at(1_737_000_000),
            duration: "4 dias".to_string(),
            price: 2_500.0,
        },
    ]
});

pub fn users() -> &'static [User] {
    &USERS
}

/// The fallback account used whenever a lookup misses.
pub fn first_user() -> User {
    USERS[0].clone()
}

pub fn find_user(id: &str) -> Option<User> {
    USERS.iter().find(|user| user.id == id).cloned()
}

pub fn find_user_by_email(email: &str) -> Option<User> {
    USERS.iter().find(|user| user.email == email).cloned()
}

/// Lookup by id, falling back to [`first_user`].
pub fn user_or_first(id: &str) -> User {
    find_user(id).unwrap_or_else(first_user)
}

pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn events() -> Vec<Event> {
    EVENTS.clone()
}

/// Seed conversation for event `"1"`.
pub fn messages() -> Vec<ChatMessage> {
    MESSAGES.clone()
}

pub fn places() -> &'static [Place] {
    &PLACES
}

pub fn itineraries() -> &'static [Itinerary] {
    &ITINERARIES
}
