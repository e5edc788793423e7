//! Built-in content: the three catalog artworks and the three quests.

use crown_shared::{ArtworkId, Difficulty, ImageRef, QuestId};
use crown_store::Artwork;

use crate::screens::quests::{Quest, QuizQuestion};

pub fn seed_artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            id: ArtworkId::from("1"),
            title: "Starry Night".into(),
            artist: "Vincent van Gogh".into(),
            year: 1889,
            description: "A masterpiece of post-impressionism.".into(),
            image: ImageRef::from(
                "https://www.diamondartclub.com/cdn/shop/files/the-starry-night-v1-diamond-art-painting-45185192820929.jpg?v=1726256407&width=3745",
            ),
            style: None,
        },
        Artwork {
            id: ArtworkId::from("2"),
            title: "The Night Watch".into(),
            artist: "Rembrandt".into(),
            year: 1642,
            description: "A famous group portrait with dramatic light.".into(),
            image: ImageRef::from(
                "https://cdn.britannica.com/98/240498-138-7736B25A/Rembrandt-van-Rijn-The-Night-Watch.jpg?w=800&h=450&c=crop",
            ),
            style: None,
        },
        Artwork {
            id: ArtworkId::from("3"),
            title: "Girl with a Pearl Earring".into(),
            artist: "Johannes Vermeer".into(),
            year: 1665,
            description: "A delicate portrait of a girl.".into(),
            image: ImageRef::from(
                "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0f/1665_Girl_with_a_Pearl_Earring.jpg/270px-1665_Girl_with_a_Pearl_Earring.jpg",
            ),
            style: None,
        },
    ]
}

fn q(question: &str, options: [&str; 4], correct: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.map(str::to_string),
        correct_answer: correct.to_string(),
    }
}

pub fn seed_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: QuestId::from("1"),
            title: "Van Gogh’s Mystery".into(),
            description: "Solve the hidden puzzle in Starry Night.".into(),
            difficulty: Difficulty::Easy,
            quiz_questions: [
                q(
                    "What year was Starry Night painted?",
                    ["1889", "1875", "1890", "1885"],
                    "1889",
                ),
                q(
                    "In which museum is Starry Night primarily exhibited?",
                    [
                        "Museum of Modern Art",
                        "The Louvre",
                        "Van Gogh Museum",
                        "National Gallery",
                    ],
                    "Museum of Modern Art",
                ),
                q(
                    "What emotion is most associated with Starry Night?",
                    ["Melancholy", "Joy", "Anger", "Calm"],
                    "Melancholy",
                ),
                q(
                    "Which technique is heavily used in Starry Night?",
                    ["Impasto", "Pointillism", "Cubism", "Surrealism"],
                    "Impasto",
                ),
                q(
                    "What inspired Van Gogh to paint Starry Night?",
                    [
                        "His view from the asylum",
                        "A dream",
                        "The sea",
                        "Rural landscapes",
                    ],
                    "His view from the asylum",
                ),
            ],
        },
        Quest {
            id: QuestId::from("2"),
            title: "Rembrandt’s Challenge".into(),
            description: "Find the missing details in The Night Watch.".into(),
            difficulty: Difficulty::Medium,
            quiz_questions: [
                q(
                    "In which year was The Night Watch completed?",
                    ["1642", "1650", "1630", "1660"],
                    "1642",
                ),
                q(
                    "What is a distinctive feature of The Night Watch?",
                    [
                        "Dynamic use of light",
                        "Abstract composition",
                        "Minimalist style",
                        "Pastel colors",
                    ],
                    "Dynamic use of light",
                ),
                q(
                    "Which technique did Rembrandt employ in The Night Watch?",
                    ["Chiaroscuro", "Fresco", "Watercolor", "Collage"],
                    "Chiaroscuro",
                ),
                q(
                    "The Night Watch is renowned for its portrayal of:",
                    [
                        "A military company",
                        "A royal family",
                        "Mythical creatures",
                        "A landscape",
                    ],
                    "A military company",
                ),
                q(
                    "In which city can you primarily view The Night Watch?",
                    ["Amsterdam", "Paris", "London", "Rome"],
                    "Amsterdam",
                ),
            ],
        },
        Quest {
            id: QuestId::from("3"),
            title: "Vermeer’s Secret".into(),
            description: "Discover the story behind the Girl with a Pearl Earring.".into(),
            difficulty: Difficulty::Hard,
            quiz_questions: [
                q(
                    "Which feature is most noted in the Girl with a Pearl Earring?",
                    [
                        "The earring",
                        "The hairstyle",
                        "The background",
                        "The lighting",
                    ],
                    "The earring",
                ),
                q(
                    "Who is the artist behind Girl with a Pearl Earring?",
                    [
                        "Johannes Vermeer",
                        "Rembrandt",
                        "Leonardo da Vinci",
                        "Michelangelo",
                    ],
                    "Johannes Vermeer",
                ),
                q(
                    "What style is the painting Girl with a Pearl Earring associated with?",
                    ["Baroque", "Impressionism", "Renaissance", "Modernism"],
                    "Baroque",
                ),
                q(
                    "What is the likely reason behind the girl’s enigmatic expression?",
                    ["Mystery", "Happiness", "Anger", "Sadness"],
                    "Mystery",
                ),
                q(
                    "Which technique did Vermeer famously use in this painting?",
                    ["Use of light and shadow", "Cubism", "Sfumato", "Collage"],
                    "Use of light and shadow",
                ),
            ],
        },
    ]
}
