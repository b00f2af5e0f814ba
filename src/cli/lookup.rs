use crate::content::Track;
use crate::models::{DocEntry, InterviewQuestion};

pub fn lookup(track: Track<'_>, id: &str) {
    let found = match track {
        Track::Language(language) => {
            if let Some((category, entry)) = language.entry(id) {
                print_entry(&category.label, entry);
                true
            } else if let Some(category) = language.category(id) {
                println!("Category: {} ({} lessons)", category.label, category.entries.len());
                for entry in &category.entries {
                    println!("  - {} ({})", entry.title, entry.id);
                }
                true
            } else {
                false
            }
        }
        Track::Role(role) => {
            if let Some((topic, question)) = role.question(id) {
                print_question(&topic.label, question);
                true
            } else if let Some(topic) = role.topic(id) {
                println!("Topic: {} ({} questions)", topic.label, topic.questions.len());
                if let Some(ref description) = topic.description {
                    println!("{}", description);
                }
                for question in &topic.questions {
                    println!("  - {} ({})", question.title, question.id);
                }
                true
            } else {
                false
            }
        }
    };

    if !found {
        eprintln!("Nothing with id '{}' in {}", id, track.label());
        std::process::exit(1);
    }
}

fn print_entry(category: &str, entry: &DocEntry) {
    println!("Lesson:     {}", entry.title);
    println!("Category:   {}", category);
    println!("Difficulty: {}", entry.difficulty.display_name());
    if !entry.tags.is_empty() {
        println!("Tags:       {}", entry.tags.join(", "));
    }
    if let Some(ref cheat_sheet) = entry.cheat_sheet {
        println!("Cheat sheet: {}", cheat_sheet);
    }
    println!("Sections:");
    for section in &entry.sections {
        let diagram = section
            .diagram
            .as_ref()
            .map(|d| format!(" [{}: {}]", d.type_name(), d.caption().unwrap_or("untitled")))
            .unwrap_or_default();
        println!("  - {}{}", section.heading, diagram);
    }
    println!("Quiz questions: {}", entry.quiz_len());
    if let Some(ref challenge) = entry.challenge {
        println!("Challenge: {} ({} hints)", challenge.prompt, challenge.hints.len());
    }
}

fn print_question(topic: &str, question: &InterviewQuestion) {
    println!("Question:   {}", question.title);
    println!("Topic:      {}", topic);
    println!("Difficulty: {}", question.difficulty.display_name());
    if !question.tags.is_empty() {
        println!("Tags:       {}", question.tags.join(", "));
    }
    println!();
    println!("{}", question.answer);
    if let Some(ref takeaway) = question.key_takeaway {
        println!();
        println!("Key takeaway: {}", takeaway);
    }
    if !question.follow_ups.is_empty() {
        println!();
        println!("Follow-ups:");
        for follow_up in &question.follow_ups {
            println!("  - {}", follow_up);
        }
    }
}
