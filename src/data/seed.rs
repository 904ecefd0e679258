//! Built-in Design and Analysis of Algorithms question set.

use crate::models::Question;

fn question(id: u32, prompt: &str, options: [&str; 4], correct: &str, resource: &str) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
        resource: Some(resource.to_string()),
    }
}

/// The ten questions shipped with the quiz.
pub fn daa_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "What is the time complexity of the Merge Sort algorithm?",
            ["O(n)", "O(n log n)", "O(n²)", "O(log n)"],
            "O(n log n)",
            "https://www.geeksforgeeks.org/merge-sort/",
        ),
        question(
            2,
            "Which of the following is not a Divide and Conquer algorithm?",
            ["Merge Sort", "Quick Sort", "Binary Search", "Prim's Algorithm"],
            "Prim's Algorithm",
            "https://www.geeksforgeeks.org/divide-and-conquer-algorithm/",
        ),
        question(
            3,
            "Which data structure is used in Breadth-First Search (BFS) of a graph?",
            ["Stack", "Queue", "Heap", "Linked List"],
            "Queue",
            "https://www.geeksforgeeks.org/breadth-first-search-or-bfs-for-a-graph/",
        ),
        question(
            4,
            "What is the worst-case time complexity of Quick Sort?",
            ["O(n log n)", "O(n²)", "O(n)", "O(log n)"],
            "O(n²)",
            "https://www.geeksforgeeks.org/quick-sort/",
        ),
        question(
            5,
            "Which of the following algorithms is used to solve the Single Source Shortest Path problem for graphs with negative weights?",
            [
                "Dijkstra's Algorithm",
                "Bellman-Ford Algorithm",
                "Floyd-Warshall Algorithm",
                "Prim's Algorithm",
            ],
            "Bellman-Ford Algorithm",
            "https://www.geeksforgeeks.org/bellman-ford-algorithm-dp-23/",
        ),
        question(
            6,
            "In Dynamic Programming, the technique of storing previously computed values to avoid repeated work is called:",
            ["Memoization", "Recursion", "Backtracking", "Branch and Bound"],
            "Memoization",
            "https://www.geeksforgeeks.org/dynamic-programming/",
        ),
        question(
            7,
            "Which of the following problems can be solved using Greedy Algorithm?",
            [
                "0/1 Knapsack Problem",
                "Longest Common Subsequence",
                "Huffman Coding",
                "Matrix Chain Multiplication",
            ],
            "Huffman Coding",
            "https://www.geeksforgeeks.org/greedy-algorithms/",
        ),
        question(
            8,
            "What is the time complexity of inserting an element into a Min-Heap?",
            ["O(1)", "O(log n)", "O(n)", "O(n log n)"],
            "O(log n)",
            "https://www.geeksforgeeks.org/binary-heap/",
        ),
        question(
            9,
            "Which traversal technique is used by Topological Sorting of a Directed Acyclic Graph (DAG)?",
            [
                "Breadth-First Search",
                "Depth-First Search",
                "Inorder Traversal",
                "Level Order Traversal",
            ],
            "Depth-First Search",
            "https://www.geeksforgeeks.org/topological-sorting/",
        ),
        question(
            10,
            "Which of the following is NOT a characteristic of Greedy Algorithm?",
            [
                "Builds solution step by step",
                "Makes locally optimal choice at each step",
                "Backtracks to find optimal solution",
                "May not always give the globally optimal solution",
            ],
            "Backtracks to find optimal solution",
            "https://www.geeksforgeeks.org/greedy-algorithms/",
        ),
    ]
}
