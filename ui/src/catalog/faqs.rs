//! Frequently asked questions shown on the support page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 8] = [
    FaqEntry {
        id: "01",
        question: "How do I make a reservation on your website",
        answer: "Provide a step-by-step guide on how users can browse and book travel services on your platform. Include information on searching for destinations, selecting dates, choosing accommodation, and completing the booking process. Mention any special features or tools that can help users find the best deals.",
    },
    FaqEntry {
        id: "02",
        question: "What documents do I need for my trip, and how do I obtain them?",
        answer: "Different destinations require different travel documents. Generally, you'll need a valid passport with at least six months validity beyond your travel dates. Some countries require visas, which can be obtained through their embassy or consulate. For specific documentation requirements, check the official government website of your destination country or contact our customer service for assistance.",
    },
    FaqEntry {
        id: "03",
        question: "In the event that I need to modify or cancel my reservation, what are the policies in place?",
        answer: "Our modification and cancellation policies vary depending on the type of booking and the provider. Most reservations can be modified or cancelled up to 24-48 hours before the scheduled service. For hotels, many offer free cancellation up to a certain date. Please refer to the specific terms and conditions provided at the time of booking, or contact our customer service team for assistance with your particular reservation.",
    },
    FaqEntry {
        id: "04",
        question: "Can you specify the types of credit/debit cards, digital wallets, or other online payment methods accepted?",
        answer: "We accept major credit and debit cards including Visa, Mastercard, American Express, and Discover. Digital payment options include PayPal, Apple Pay, Google Pay, and Stripe. We also support regional payment methods in certain countries. All payment transactions are secure and encrypted to ensure your financial information remains protected.",
    },
    FaqEntry {
        id: "05",
        question: "What are the working hours, and what can I expect in terms of response times?",
        answer: "Our customer service team is available 24/7 to assist with urgent matters. For general inquiries, we operate from 8 AM to 8 PM (GMT) Monday through Saturday, and 10 AM to 6 PM on Sundays. Email responses are typically provided within 24 hours, while live chat support aims to connect you with an agent within 5 minutes. Phone support wait times average under 3 minutes during regular business hours.",
    },
    FaqEntry {
        id: "06",
        question: "How can I find the best deals and offers for my trip?",
        answer: "To find the best deals, we recommend booking early and using our price comparison tools. You can also sign up for our newsletter to receive exclusive offers, set price alerts for your desired destinations, and check our seasonal promotions page. Our 'Last Minute Deals' section features discounted rates for spontaneous travelers, and our loyalty program members get access to special rates and early-bird discounts.",
    },
    FaqEntry {
        id: "07",
        question: "What are your policies regarding travel insurance?",
        answer: "We strongly recommend purchasing travel insurance for all bookings. Our platform offers comprehensive insurance options that cover trip cancellations, medical emergencies, lost luggage, and travel delays. You can add insurance during the checkout process, and policies can be customized based on your specific needs and destination. For international travel, medical coverage is particularly important as your home country's health insurance may not provide coverage abroad.",
    },
    FaqEntry {
        id: "08",
        question: "How can I access my booking details and itinerary?",
        answer: "You can access your booking details by logging into your account on our website or mobile app. Navigate to the 'My Trips' section to view all your current and past bookings. From there, you can download or print your itinerary, access e-tickets, view reservation details, and make changes if needed. We also send confirmation emails with all relevant information, and you can set up mobile notifications for travel updates.",
    },
];
