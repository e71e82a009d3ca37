use crate::{ContactInfo, Education, Experience, Hero, Profile, Project, SkillGroup};

const EMAIL: &str = "ruturajdaphal05@gmail.com";
const LINKEDIN: &str = "https://linkedin.com/in/ruturaj-daphal-rd0501";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn skill_group(category: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_owned(),
        skills: strings(skills),
    }
}

fn project(title: &str, description: &str, technologies: &[&str]) -> Project {
    Project {
        title: title.to_owned(),
        description: description.to_owned(),
        technologies: strings(technologies),
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            hero: Hero::default(),
            skills: vec![
                skill_group(
                    "LLM Frameworks",
                    &["Gemini", "OpenAI", "Langchain", "Hugging Face", "LLAMA"],
                ),
                skill_group(
                    "ML Frameworks",
                    &["TensorFlow", "PyTorch", "NLP", "Scikit-learn"],
                ),
                skill_group(
                    "Data Analysis & Visualization",
                    &["Pandas", "NumPy", "Matplotlib", "Seaborn", "OpenCV", "Folium"],
                ),
                skill_group("Programming Languages", &["Python", "C++", "Java"]),
                skill_group("Platforms", &["Jupyter Notebook", "Git"]),
            ],
            projects: vec![
                project(
                    "Multimodal AI Chatbot with RAG & Session Memory",
                    "Architected a versatile AI chatbot using Streamlit and LangChain, integrating \
                     multiple LLMs (Gemini, Llama) for text, PDF, and image analysis. Engineered a \
                     Retrieval-Augmented Generation (RAG) pipeline with ChromaDB and HuggingFace \
                     embeddings for accurate document Q&A.",
                    &["LLM", "Langchain", "Hugging Face", "Streamlit", "ChromaDB"],
                ),
                project(
                    "ATS Resume Analyzer",
                    "Built an interactive app using Gemini 1.5 Flash to evaluate resumes against \
                     job descriptions. Provided ATS-style feedback, resume improvement \
                     suggestions, and LLM-driven match scoring.",
                    &["Streamlit", "Gemini Flash", "Python", "PyPDF2"],
                ),
                project(
                    "Movie Sentiment & Salary Predicting Model",
                    "Developed a movie sentiment classifier with an LSTM model in TensorFlow, \
                     leveraging NLTK for text preprocessing to accurately predict sentiment.",
                    &["LSTM", "TensorFlow", "NLTK"],
                ),
                project(
                    "Fine Tuning with LoRA",
                    "Fine-tuned the Google Gemma-2B model on an English quotes dataset using \
                     4-bit quantization (BitsAndBytes) and Low-Rank Adaptation (LoRA) to enhance \
                     performance on consumer hardware.",
                    &["Gemma", "Transformers", "Hugging Face", "LoRA"],
                ),
                project(
                    "British Airways Customer Model",
                    "Developed a Random Forest model to predict customer booking completion, \
                     analyzing trends and feature importance using Matplotlib and Seaborn.",
                    &["Pandas", "Matplotlib", "Sklearn", "Seaborn"],
                ),
            ],
            experiences: vec![
                Experience {
                    title: "Artificial Intelligence Intern".to_owned(),
                    company: "Acmegrade".to_owned(),
                    period: "Jan 2024 - Mar 2024".to_owned(),
                    achievements: strings(&[
                        "Developed and optimized ML models, leveraging NLP techniques for \
                         improved accuracy.",
                        "Conducted data preprocessing and feature engineering, boosting model \
                         efficiency by 15%.",
                    ]),
                },
                Experience {
                    title: "Machine Learning Intern".to_owned(),
                    company: "Cognifyz Technologies".to_owned(),
                    period: "Dec 2024 - Jan 2025".to_owned(),
                    achievements: strings(&[
                        "Built a restaurant recommendation system using collaborative & \
                         content-based filtering, improving recommendation accuracy by 20%.",
                        "Designed data pipelines for real-time ingestion, reducing processing \
                         time by 30%.",
                    ]),
                },
            ],
            education: Education::default(),
            contact: ContactInfo::default(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Ruturaj Daphal".to_owned(),
            headline: "AI & Generative AI Engineer".to_owned(),
            summary: "AI & GenAI Developer skilled in building intelligent applications using \
                      LangChain, Gemini Pro, and OpenAI tools. Focused on creating scalable, \
                      real-world AI solutions with expertise in deep learning frameworks and \
                      vector databases like ChromaDB and FAISS."
                .to_owned(),
            email: EMAIL.to_owned(),
            linkedin_url: LINKEDIN.to_owned(),
        }
    }
}

impl Default for Education {
    fn default() -> Self {
        Self {
            degree: "B.E. Computer Engineering (Pursuing)".to_owned(),
            institution: "Modern Education Society's Wadia College of Engineering, Pune (SPPU)"
                .to_owned(),
            period: "2022 - 2026".to_owned(),
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            email: EMAIL.to_owned(),
            linkedin_url: LINKEDIN.to_owned(),
            linkedin_label: "linkedin.com/in/ruturaj-daphal-rd0501".to_owned(),
            location: "Pune, Maharashtra".to_owned(),
        }
    }
}
