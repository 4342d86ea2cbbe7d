//! Prompt templates sent to the generation backend.

/// Prompt asking for production code in `language`.
pub fn code_prompt(language: &str, query: &str) -> String {
    format!(
        "You are a professional {language} programmer.\n\
         Task: {query}\n\
         \n\
         Requirements:\n\
         - Return ONLY {language} code (no explanations, no markdown).\n\
         - The code must be complete, production-ready, modular, and maintainable.\n\
         - Include concise inline comments (using {language} comment syntax).\n\
         - Ensure it compiles and runs without errors.\n"
    )
}

/// Prompt asking for unit tests of `code` written with `framework`.
pub fn tests_prompt(code: &str, language: &str, framework: &str) -> String {
    format!(
        "You are a professional {language} developer specializing in {framework} testing.\n\
         \n\
         Task: Generate comprehensive unit tests for the following {language} code:\n\
         \n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         Requirements:\n\
         - Use {framework} testing framework.\n\
         - Write complete, production-ready unit tests.\n\
         - Cover edge cases, normal cases, and error scenarios.\n\
         - Include clear test names and comments.\n\
         - Return ONLY the test code (no explanations, no markdown code blocks).\n\
         - Ensure the tests are properly structured and can run independently.\n\
         - Import necessary testing libraries and modules.\n"
    )
}

/// Prompt asking for a four-section Markdown document.
pub fn docs_prompt(code: &str, language: &str, project_name: &str) -> String {
    format!(
        "You are a senior software architect. Produce a professional Markdown document in English\n\
         for a project named \"{project_name}\" describing the following {language} code:\n\
         \n\
         ```{language}\n\
         {code}\n\
         ```\n\
         \n\
         Follow this exact structure and keep the headings verbatim:\n\
         \n\
         ## Project Description\n\
         Summarize what the code solves, its core components, inputs, and outputs (max 2 short paragraphs).\n\
         \n\
         ## Instructions\n\
         Provide numbered, actionable steps to run the code, including prerequisites and commands.\n\
         \n\
         ## Use Cases\n\
         List practical scenarios or examples where this code is helpful. Use bullet points or short code snippets.\n\
         \n\
         ## Dependencies\n\
         Enumerate required configurations, environment variables, external services, or libraries.\n\
         \n\
         Rules:\n\
         - Write everything in English only.\n\
         - Return only the Markdown content. Do not wrap the entire document in code fences.\n\
         - Be specific and avoid boilerplate sentences.\n"
    )
}
