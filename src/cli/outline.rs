use crate::content::Track;

pub fn print_outline(track: Track<'_>) {
    println!("\n{}", "=".repeat(60));
    println!("  {} ({})", track.label(), track.id());
    println!("{}\n", "=".repeat(60));

    match track {
        Track::Language(language) => {
            println!("{}", language.tagline);
            println!("Docs: {}  Playground: {}\n", language.doc_url, language.playground_url);

            for (ci, category) in language.categories.iter().enumerate() {
                println!("{}. {}", ci + 1, category.label);
                for (ei, entry) in category.entries.iter().enumerate() {
                    let mut extras = Vec::new();
                    if entry.quiz_len() > 0 {
                        extras.push(format!("quiz:{}", entry.quiz_len()));
                    }
                    if entry.challenge.is_some() {
                        extras.push("challenge".to_string());
                    }
                    println!(
                        "   {}.{} [{}] {} ({}) {}",
                        ci + 1,
                        ei + 1,
                        entry.difficulty.badge(),
                        entry.title,
                        entry.id,
                        extras.join(" ")
                    );
                }
            }
        }
        Track::Role(role) => {
            println!("{}\n", role.tagline);

            for (ti, topic) in role.topics.iter().enumerate() {
                println!("{}. {}", ti + 1, topic.label);
                for (qi, question) in topic.questions.iter().enumerate() {
                    println!(
                        "   {}.{} [{}] {} ({})",
                        ti + 1,
                        qi + 1,
                        question.difficulty.badge(),
                        question.title,
                        question.id
                    );
                }
            }
        }
    }
    println!();
}
