//! Built-in question bank used when no JSON file is given.

use crate::models::Question;

const DEFAULT_BANK: [(&str, [&str; 4], &str); 10] = [
    (
        "What is the main function of an operating system?",
        [
            "Manage hardware resources",
            "Provide internet connectivity",
            "Create documents",
            "Run antivirus software",
        ],
        "Manage hardware resources",
    ),
    (
        "Which operating system is known for its open-source nature?",
        ["Windows", "macOS", "Linux", "Chrome OS"],
        "Linux",
    ),
    (
        "What does CPU stand for in operating systems?",
        [
            "Central Processing Unit",
            "Computer Power Unit",
            "Central Program Utility",
            "Core Processing Unit",
        ],
        "Central Processing Unit",
    ),
    (
        "Which scheduling algorithm allocates the CPU to the process that requests it first?",
        [
            "Round Robin",
            "Shortest Job First",
            "First-Come, First-Served",
            "Priority Scheduling",
        ],
        "First-Come, First-Served",
    ),
    (
        "What is virtual memory?",
        [
            "Memory stored in the cloud",
            "A technique that uses disk space as RAM",
            "Memory used by virtual machines",
            "A type of ROM",
        ],
        "A technique that uses disk space as RAM",
    ),
    (
        "Which Windows version introduced the Start Menu?",
        ["Windows 95", "Windows XP", "Windows 7", "Windows 10"],
        "Windows 95",
    ),
    (
        "What is the kernel of an operating system?",
        [
            "The user interface",
            "The core component that manages hardware",
            "The file system",
            "The application launcher",
        ],
        "The core component that manages hardware",
    ),
    (
        "Which file system is commonly used in modern Windows versions?",
        ["FAT32", "NTFS", "EXT4", "HFS+"],
        "NTFS",
    ),
    (
        "What is multitasking in operating systems?",
        [
            "Running multiple CPUs",
            "Executing multiple tasks simultaneously",
            "Using multiple monitors",
            "Installing multiple OS",
        ],
        "Executing multiple tasks simultaneously",
    ),
    (
        "Which macOS version was named after a big cat?",
        [
            "macOS Sierra",
            "macOS High Sierra",
            "macOS Mojave",
            "macOS Catalina",
        ],
        "macOS Catalina",
    ),
];

pub fn default_questions() -> Vec<Question> {
    DEFAULT_BANK
        .iter()
        .map(|&(text, options, answer)| Question {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_option: answer.to_string(),
        })
        .collect()
}
