use crate::content::Catalog;
use crate::models::Difficulty;

pub fn list_tracks(catalog: &Catalog) {
    println!("Languages:");
    for language in &catalog.languages {
        println!(
            "  {:<10} {:<20} {} categories, {} lessons  {}",
            language.id,
            language.label,
            language.categories.len(),
            language.entry_count(),
            format_breakdown(&language.difficulty_breakdown())
        );
    }

    println!();
    println!("Interview roles:");
    for role in &catalog.roles {
        println!(
            "  {:<10} {:<20} {} topics, {} questions  {}",
            role.id,
            role.label,
            role.topics.len(),
            role.question_count(),
            format_breakdown(&role.difficulty_breakdown())
        );
    }

    println!();
    println!("Run `langdeck outline <id>` to see a track's contents");
}

fn format_breakdown(counts: &[(Difficulty, usize)]) -> String {
    let parts: Vec<String> = counts
        .iter()
        .map(|(d, n)| format!("{}:{}", d.badge(), n))
        .collect();
    format!("[{}]", parts.join(" "))
}
