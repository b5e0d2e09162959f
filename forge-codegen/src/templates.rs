//! Template library
//!
//! This module holds the fixed template bundle for each program kind:
//! required headers, zero or one helper fragment, and a main-body
//! statement sequence. Helper identifiers are spelled according to the
//! caller's naming convention; everything else is fixed text.

use crate::kind::ProgramKind;
use crate::style::CodeStyle;

/// Unformatted template pieces for one kind and style.
#[derive(Debug, Clone)]
pub struct TemplateBundle {
    /// Header names in emission order, angle brackets included
    pub includes: Vec<&'static str>,
    /// Raw helper function fragments, re-indented by the formatter
    pub functions: Vec<String>,
    /// Raw main-body statement fragment, flat-indented by the formatter
    pub main_body: String,
}

impl TemplateBundle {
    /// Build the bundle for a kind. The kind set is closed, so this cannot
    /// fail.
    pub fn build(kind: ProgramKind, style: &CodeStyle) -> Self {
        match kind {
            ProgramKind::Calculator => calculator(style),
            ProgramKind::Array => array(style),
            ProgramKind::Class => class(style),
            ProgramKind::FileIo => file_io(style),
            ProgramKind::Algorithm => algorithm(style),
            ProgramKind::Basic => basic(style),
        }
    }
}

fn calculator(style: &CodeStyle) -> TemplateBundle {
    let name = style
        .naming
        .pick("perform_operation", "PerformOperation", "performOperation");

    TemplateBundle {
        includes: vec!["<iostream>", "<iomanip>"],
        functions: vec![format!(
            r#"double {name}(double a, double b, char op) {{
    switch(op) {{
        case '+': return a + b;
        case '-': return a - b;
        case '*': return a * b;
        case '/':
            if(b != 0) return a / b;
            else {{
                std::cout << "Error: Division by zero!" << std::endl;
                return 0;
            }}
        default:
            std::cout << "Error: Invalid operation!" << std::endl;
            return 0;
    }}
}}"#
        )],
        main_body: format!(
            r#"std::cout << "Simple Calculator" << std::endl;
std::cout << "=================" << std::endl;

double num1, num2;
char operation;

std::cout << "Enter first number: ";
std::cin >> num1;

std::cout << "Enter operation (+, -, *, /): ";
std::cin >> operation;

std::cout << "Enter second number: ";
std::cin >> num2;

double result = {name}(num1, num2, operation);

std::cout << std::fixed << std::setprecision(2);
std::cout << "Result: " << num1 << " " << operation << " " << num2 << " = " << result << std::endl;"#
        ),
    }
}

fn array(style: &CodeStyle) -> TemplateBundle {
    let name = style
        .naming
        .pick("display_array", "DisplayArray", "displayArray");

    TemplateBundle {
        includes: vec!["<iostream>", "<vector>", "<algorithm>"],
        functions: vec![format!(
            r#"void {name}(const std::vector<int>& arr) {{
    std::cout << "Array elements: ";
    for(const auto& element : arr) {{
        std::cout << element << " ";
    }}
    std::cout << std::endl;
}}"#
        )],
        main_body: format!(
            r#"std::vector<int> numbers = {{64, 34, 25, 12, 22, 11, 90}};

std::cout << "Original ";
{name}(numbers);

std::sort(numbers.begin(), numbers.end());

std::cout << "Sorted ";
{name}(numbers);"#
        ),
    }
}

fn class(style: &CodeStyle) -> TemplateBundle {
    // PascalCase and camelCase deliberately collapse to the same spelling
    // here; changing it would change observable output.
    let name = style
        .naming
        .pick("student_record", "StudentRecord", "StudentRecord");

    TemplateBundle {
        includes: vec!["<iostream>", "<string>"],
        functions: vec![format!(
            r#"class {name} {{
private:
    std::string name;
    int age;
    double grade;

public:
    {name}(std::string n, int a, double g) : name(n), age(a), grade(g) {{}}

    void display() const {{
        std::cout << "Name: " << name << ", Age: " << age << ", Grade: " << grade << std::endl;
    }}

    std::string getName() const {{ return name; }}
    int getAge() const {{ return age; }}
    double getGrade() const {{ return grade; }}
}}"#
        )],
        main_body: format!(
            r#"{name} student1("Alice Johnson", 20, 85.5);
{name} student2("Bob Smith", 19, 92.0);

std::cout << "Student Records:" << std::endl;
std::cout << "===============" << std::endl;

student1.display();
student2.display();"#
        ),
    }
}

fn file_io(_style: &CodeStyle) -> TemplateBundle {
    TemplateBundle {
        includes: vec!["<iostream>", "<fstream>", "<string>"],
        functions: Vec::new(),
        main_body: r#"std::ofstream outFile("example.txt");
if(outFile.is_open()) {
    outFile << "Hello, World!" << std::endl;
    outFile << "This is a sample file." << std::endl;
    outFile.close();
    std::cout << "File written successfully." << std::endl;
}

std::ifstream inFile("example.txt");
std::string line;

if(inFile.is_open()) {
    std::cout << "File contents:" << std::endl;
    while(std::getline(inFile, line)) {
        std::cout << line << std::endl;
    }
    inFile.close();
} else {
    std::cout << "Unable to open file." << std::endl;
}"#
        .to_string(),
    }
}

fn algorithm(style: &CodeStyle) -> TemplateBundle {
    let name = style.naming.pick("bubble_sort", "BubbleSort", "bubbleSort");

    TemplateBundle {
        includes: vec!["<iostream>", "<vector>"],
        functions: vec![format!(
            r#"void {name}(std::vector<int>& arr) {{
    int n = arr.size();
    for(int i = 0; i < n-1; i++) {{
        for(int j = 0; j < n-i-1; j++) {{
            if(arr[j] > arr[j+1]) {{
                std::swap(arr[j], arr[j+1]);
            }}
        }}
    }}
}}"#
        )],
        main_body: format!(
            r#"std::vector<int> data = {{64, 34, 25, 12, 22, 11, 90}};

std::cout << "Original array: ";
for(int num : data) {{
    std::cout << num << " ";
}}
std::cout << std::endl;

{name}(data);

std::cout << "Sorted array: ";
for(int num : data) {{
    std::cout << num << " ";
}}
std::cout << std::endl;"#
        ),
    }
}

fn basic(style: &CodeStyle) -> TemplateBundle {
    let hint = if style.include_comments {
        "User prompt"
    } else {
        ""
    };

    TemplateBundle {
        includes: vec!["<iostream>"],
        functions: Vec::new(),
        main_body: format!(
            r#"std::cout << "Hello, World!" << std::endl;
std::cout << "This is a basic C++ program." << std::endl;

// Add your custom logic here based on: "{hint}"

return 0;"#
        ),
    }
}
