use rand::Rng;

use crate::puzzle::word::{Direction, Word};

pub struct Puzzle {
    pub title: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub words: Vec<Word>,
}

pub fn puzzles() -> Vec<Puzzle> {
    use Direction::{Across, Down};
    vec![
        Puzzle {
            title: "Warm-up",
            rows: 4,
            cols: 3,
            words: vec![
                Word::new("CAT", "Whiskered mouser", 0, 0, Across),
                Word::new("COLD", "Sweater weather", 0, 0, Down),
                Word::new("TOE", "Boot tip occupant", 0, 2, Down),
                Word::new("LIE", "Fib", 2, 0, Across),
            ],
        },
        Puzzle {
            title: "Greetings",
            rows: 5,
            cols: 5,
            words: vec![
                Word::new("HELLO", "Phone opener", 0, 0, Across),
                Word::new("HAPPY", "Far from glum", 0, 0, Down),
                Word::new("LOW", "Opposite of high", 0, 3, Down),
                Word::new("YES", "Thumbs-up answer", 4, 0, Across),
            ],
        },
        Puzzle {
            title: "Systems",
            rows: 4,
            cols: 4,
            words: vec![
                Word::new("RUST", "Oxidized iron coat", 0, 0, Across),
                Word::new("RAIN", "Umbrella weather", 0, 0, Down),
                Word::new("SEA", "Salty expanse", 0, 2, Down),
                Word::new("TOP", "Spinning toy", 0, 3, Down),
                Word::new("NET", "Goalkeeper's backdrop", 3, 0, Across),
            ],
        },
    ]
}

pub fn random_puzzle() -> Puzzle {
    let mut all = puzzles();
    let idx = rand::thread_rng().gen_range(0..all.len());
    all.swap_remove(idx)
}
