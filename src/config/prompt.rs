//! The two fixed prompt templates of the agent. Placeholders are interpolated
//! with plain string replacement; the dynamic parts (schema, history,
//! question, query, result) are inserted verbatim.

pub const SQL_PROMPT_TEMPLATE: &str = r#"You are a professional data analyst at a company. You are helping a user query the company's SQL database using only **read-only** operations.

Here are the STRICT RULES you must follow:
1. **NEVER** generate queries that modify the database — such as DELETE, INSERT, UPDATE, ALTER, DROP, CREATE, TRUNCATE, or any DDL/DML commands.
2. Only use **SELECT** queries that retrieve data.
3. Use **only the exact table and column names** as shown in the schema below.

Table Schema:
<SCHEMA>{schema}</SCHEMA>

Conversation History:
{chat_history}

Your task is to write a clean and correct SQL SELECT query to answer the user's question.

Example:
Question: Show the names of all products and their unit prices.
SQL Query: SELECT ProductName, UnitPrice FROM Products;

Your turn:

Question: {question}
SQL Query:"#;

pub const RESPONSE_PROMPT_TEMPLATE: &str = r#"You are a professional data analyst at a company. You are helping a user query the company's SQL database. Based on the table schema below, the conversation history, the user's question, the SQL query that was run, and the SQL response, write a natural language answer.

Table Schema:
<SCHEMA>{schema}</SCHEMA>

Conversation History:
{chat_history}

SQL Query:
<SQL>{query}</SQL>

SQL Response:
{response}

Question: {question}
Natural Language Answer:"#;

pub fn render_sql_prompt(schema: &str, chat_history: &str, question: &str) -> String {
    SQL_PROMPT_TEMPLATE
        .replace("{schema}", schema)
        .replace("{chat_history}", chat_history)
        .replace("{question}", question)
}

pub fn render_response_prompt(
    schema: &str,
    chat_history: &str,
    query: &str,
    response: &str,
    question: &str
) -> String {
    RESPONSE_PROMPT_TEMPLATE
        .replace("{schema}", schema)
        .replace("{chat_history}", chat_history)
        .replace("{query}", query)
        .replace("{response}", response)
        .replace("{question}", question)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = "Table: Products (ProductName varchar(40), UnitPrice decimal(10,4))\n";

    #[test]
    fn test_sql_prompt_embeds_schema_verbatim() {
        let prompt = render_sql_prompt(SCHEMA, "Assistant: Hello!\n", "How many products?");
        assert!(prompt.contains(&format!("<SCHEMA>{}</SCHEMA>", SCHEMA)));
    }

    #[test]
    fn test_sql_prompt_embeds_history() {
        let history = "Assistant: Hello!\nUser: hi\n";
        let prompt = render_sql_prompt(SCHEMA, history, "How many products?");
        assert!(prompt.contains(&format!("Conversation History:\n{}", history)));
    }

    #[test]
    fn test_sql_prompt_trailing_lines() {
        let question = "Show the names of all products and their unit prices.";
        let prompt = render_sql_prompt(SCHEMA, "", question);
        assert!(prompt.ends_with(&format!("Question: {}\nSQL Query:", question)));
    }

    #[test]
    fn test_response_prompt_embeds_query_and_result() {
        let prompt = render_response_prompt(
            SCHEMA,
            "",
            "SELECT COUNT(*) FROM Products;",
            "{ COUNT(*): 77 }",
            "How many products are there?"
        );
        assert!(prompt.contains("<SQL>SELECT COUNT(*) FROM Products;</SQL>"));
        assert!(prompt.contains("SQL Response:\n{ COUNT(*): 77 }"));
        assert!(prompt.ends_with("Question: How many products are there?\nNatural Language Answer:"));
    }
}
