pub fn build_answer_prompt(report: &str, question: &str) -> String {
    format!(
        "You are a helpful assistant that answers questions about an employee's task report.\n\
         \n\
         Task Report:\n\
         {report}\n\
         \n\
         Manager's Question: {question}\n\
         \n\
         Answer the question directly and professionally based only on the information in the report.\n\
         If the information isn't available in the report, say so clearly.\n\
         \n\
         Answer:"
    )
}

pub fn build_followup_prompt(report: &str, question: &str) -> String {
    format!(
        "Given the following manager's question and task report, suggest 3 intelligent follow-up questions\n\
         that the manager might want to ask next. Make them specific and relevant to the report content.\n\
         \n\
         Task Report:\n\
         {report}\n\
         \n\
         Initial Question: {question}\n\
         \n\
         Provide exactly 3 follow-up questions in a clean, numbered list without additional explanation.\n\
         Each question should be concise (under 10 words if possible):"
    )
}
