use crate::model::Book;

/// Genres covered by the sample library, in the order they first appear.
pub const SEED_GENRES: [&str; 4] = ["Python", "JavaScript", "Next.js", "Motivational"];

/// The sample books a fresh install starts with: 10 books, 4 genres, 5 read.
pub fn default_books() -> Vec<Book> {
    [
        ("Python Crash Course", "Eric Matthes", 2019, "Python", true),
        ("Fluent Python", "Luciano Ramalho", 2021, "Python", false),
        ("Eloquent JavaScript", "Marijn Haverbeke", 2018, "JavaScript", true),
        ("JavaScript: The Good Parts", "Douglas Crockford", 2008, "JavaScript", false),
        ("Next.js in Action", "Adam Boduch", 2021, "Next.js", false),
        ("The Complete Next.js Developer", "Reed Barger", 2022, "Next.js", false),
        ("Atomic Habits", "James Clear", 2018, "Motivational", true),
        ("Mindset: The New Psychology of Success", "Carol S. Dweck", 2006, "Motivational", true),
        ("Deep Work", "Cal Newport", 2016, "Motivational", true),
        ("The Python Data Science Handbook", "Jake VanderPlas", 2016, "Python", false),
    ]
    .into_iter()
    .map(|(title, author, year, genre, read)| Book {
        title: title.to_string(),
        author: author.to_string(),
        year,
        genre: genre.to_string(),
        read,
    })
    .collect()
}
